use std::ops::RangeInclusive;

/// Date-shaped candidates: `YYYYMMDD`, `DDMMYYYY` and `MMDDYYYY` for every
/// (year, month, day) with month in 1..=12 and day in 1..=31.
///
/// No calendar check is made, so `20230231` is generated alongside real
/// dates. The three encodings are not deduplicated.
#[derive(Debug, Clone)]
pub struct CommonDates {
    years: RangeInclusive<u32>,
}

const MONTHS: RangeInclusive<u32> = 1..=12;
const DAYS: RangeInclusive<u32> = 1..=31;
const ENCODINGS: u64 = 3;

impl CommonDates {
    pub fn new(years: RangeInclusive<u32>) -> Self {
        Self { years }
    }

    pub fn candidates(&self) -> impl Iterator<Item = String> + use<> {
        self.years.clone().flat_map(|year| {
            MONTHS.flat_map(move |month| {
                DAYS.flat_map(move |day| {
                    [
                        format!("{year:04}{month:02}{day:02}"),
                        format!("{day:02}{month:02}{year:04}"),
                        format!("{month:02}{day:02}{year:04}"),
                    ]
                })
            })
        })
    }

    pub fn candidate_count(&self) -> u64 {
        let years = self.years.clone().count() as u64;
        years * 12 * 31 * ENCODINGS
    }
}
