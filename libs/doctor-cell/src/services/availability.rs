// libs/doctor-cell/src/services/availability.rs

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use tracing::{debug, warn};

use shared_config::AppConfig;

use crate::models::{DayKey, DoctorError, TimeSlot, WorkingHours};
use crate::services::mask::AvailabilityMaskCache;

const WORKING_HOURS_PATTERN: &str =
    r"(?i)^\s*(\d{1,2}):(\d{2})\s*(AM|PM)\s*-\s*(\d{1,2}):(\d{2})\s*(AM|PM)\s*$";

pub struct AvailabilityService {
    slot_interval_minutes: u32,
    working_hours_regex: Regex,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            slot_interval_minutes: config.slot_interval_minutes.max(1),
            working_hours_regex: Regex::new(WORKING_HOURS_PATTERN)
                .expect("working hours pattern is a valid regex"),
        }
    }

    /// Parse "H:MM AM - H:MM PM" into a 24-hour start/end pair.
    pub fn parse_working_hours(&self, raw: &str) -> Result<WorkingHours, DoctorError> {
        let malformed = || DoctorError::MalformedWorkingHours(raw.to_string());

        let captures = self.working_hours_regex.captures(raw).ok_or_else(malformed)?;

        let start = to_24_hour(&captures[1], &captures[2], &captures[3]).ok_or_else(malformed)?;
        let end = to_24_hour(&captures[4], &captures[5], &captures[6]).ok_or_else(malformed)?;

        Ok(WorkingHours { start, end })
    }

    /// Bookable slots for `date`, judged against the current local time.
    pub fn generate_slots(
        &self,
        working_hours: &str,
        date: NaiveDate,
        mask: &AvailabilityMaskCache,
    ) -> Vec<TimeSlot> {
        self.generate_slots_at(working_hours, date, mask, Local::now().naive_local())
    }

    /// Bookable slots for `date` as seen at `now`.
    ///
    /// Malformed working hours produce an empty list. A slot is available
    /// only if it has not already started today and the day's mask is open
    /// at its index.
    pub fn generate_slots_at(
        &self,
        working_hours: &str,
        date: NaiveDate,
        mask: &AvailabilityMaskCache,
        now: NaiveDateTime,
    ) -> Vec<TimeSlot> {
        let hours = match self.parse_working_hours(working_hours) {
            Ok(hours) => hours,
            Err(e) => {
                warn!("{}, no slots generated", e);
                return Vec::new();
            }
        };

        let start = minutes_of_day(hours.start);
        let end = minutes_of_day(hours.end);
        if start >= end {
            debug!("Working hours {:?} span no time, no slots generated", working_hours);
            return Vec::new();
        }

        let day_key = DayKey::from_date(date);
        let pattern = mask.pattern(&day_key);

        let mut slots = Vec::new();
        let mut current = start;
        while current < end {
            let Some(time) = NaiveTime::from_hms_opt(current / 60, current % 60, 0) else {
                break;
            };
            let index = slots.len();
            let open = pattern.get(index).copied().unwrap_or(false);

            slots.push(TimeSlot {
                id: index as u32 + 1,
                time: format_slot_time(time),
                available: open && !is_past(time, date, now),
            });

            current += self.slot_interval_minutes;
        }

        debug!(
            "Generated {} slots for {} ({} available)",
            slots.len(),
            day_key,
            slots.iter().filter(|slot| slot.available).count()
        );

        slots
    }
}

/// True only for today's slots whose start time is at or before `now`.
pub fn is_past(slot_time: NaiveTime, date: NaiveDate, now: NaiveDateTime) -> bool {
    date == now.date() && slot_time <= now.time()
}

/// "9:00 AM", "12:30 PM", "12:00 AM".
pub fn format_slot_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn to_24_hour(hour: &str, minute: &str, meridiem: &str) -> Option<NaiveTime> {
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;

    if !(1..=12).contains(&hour) {
        return None;
    }

    let hour = match (hour, meridiem.eq_ignore_ascii_case("PM")) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}
