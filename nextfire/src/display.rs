//! Display implementations for the public types.

use std::fmt;

use crate::clock::ClockTime;
use crate::resolve::{Day, FireTime};
use crate::tab::TabEntry;

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FireTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.time, self.day, self.task)
    }
}

impl fmt::Display for TabEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.minute, self.hour, self.task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_zero_pads() {
        let t = ClockTime { hour: 1, minute: 5 };
        assert_eq!(t.to_string(), "01:05");
    }

    #[test]
    fn test_fire_time_line_format() {
        let fire = FireTime {
            time: ClockTime {
                hour: 1,
                minute: 30,
            },
            day: Day::Tomorrow,
            task: "/bin/run_me_daily".to_string(),
        };
        assert_eq!(fire.to_string(), "01:30 tomorrow - /bin/run_me_daily");
    }

    #[test]
    fn test_tab_entry_echoes_raw_fields() {
        let entry = TabEntry::new("*", "19", "report");
        assert_eq!(entry.to_string(), "* 19 report");
    }
}
