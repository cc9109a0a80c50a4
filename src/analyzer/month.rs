use chrono::{Datelike, NaiveDateTime};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// English name of a 1-based month number
pub(crate) fn month_name(month: u32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

/// Per-month transaction counts, indexed by `month - 1`
#[derive(Debug, Default)]
pub(crate) struct MonthCounter {
    counts: [usize; 12],
}

impl MonthCounter {
    pub(crate) fn count<I: IntoIterator<Item = NaiveDateTime>>(dates: I) -> MonthCounter {
        let mut counter = MonthCounter::default();
        for date in dates {
            counter.counts[date.month0() as usize] += 1;
        }
        counter
    }

    /// Name of the month with the highest count. Ties go to the earliest month of the year.
    /// Returns `None` if nothing was counted.
    pub(crate) fn busiest(&self) -> Option<&'static str> {
        let mut busiest: Option<(usize, usize)> = None;
        for (index, count) in self.counts.iter().enumerate() {
            if *count == 0 {
                continue;
            }
            match busiest {
                Some((_, max)) if *count <= max => {}
                _ => busiest = Some((index, *count)),
            }
        }

        busiest.map(|(index, _)| MONTH_NAMES[index])
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_busiest_counts_across_years() {
        let counter = MonthCounter::count(vec![date(2019, 3, 1), date(2020, 3, 9), date(2019, 1, 5)]);
        assert_eq!(counter.busiest(), Some("March"));
    }

    #[test]
    fn test_busiest_tie_goes_to_earliest_month() {
        let counter = MonthCounter::count(vec![date(2019, 11, 1), date(2019, 4, 2), date(2019, 11, 3), date(2019, 4, 4)]);
        assert_eq!(counter.busiest(), Some("April"));
    }

    #[test]
    fn test_busiest_empty() {
        assert_eq!(MonthCounter::count(vec![]).busiest(), None);
    }
}
