//! Third-party Gregorian algorithms on `i32` Unix days.
//!
//! Shared by the benchmarks and the crate's tests, which include this file
//! by path. The parent module must have the crate's `Date` in scope.

#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use super::Date;

// Julian day number of the Unix epoch.
const JULIAN_DAY_ADJUSTMENT: i32 = 2_440_588;

/// Fliegel and Van Flandern (1968), on Unix days.
pub mod fliegel_van_flandern {
    use super::{Date, JULIAN_DAY_ADJUSTMENT};

    pub fn to_date(unix_day: i32) -> Date<i32> {
        let mut l = unix_day + 68_569 + JULIAN_DAY_ADJUSTMENT;
        let n = 4 * l / 146_097;
        l -= (146_097 * n + 3) / 4;
        let mut i = 4000 * (l + 1) / 1_461_001;
        l = l - 1461 * i / 4 + 31;
        let mut j = 80 * l / 2447;
        let k = l - 2447 * j / 80;
        l = j / 11;
        j = j + 2 - 12 * l;
        i = 100 * (n - 49) + i + l;
        Date::new(i, j as u8, k as u8)
    }

    pub fn to_rata_die(date: Date<i32>) -> i32 {
        let (i, j, k) = (date.year, i32::from(date.month), i32::from(date.day));
        let jd = k - 32_075 + 1461 * (i + 4800 + (j - 14) / 12) / 4 + 367 * (j - 2 - (j - 14) / 12 * 12) / 12
            - 3 * ((i + 4900 + (j - 14) / 12) / 100) / 4;
        jd - JULIAN_DAY_ADJUSTMENT
    }
}

/// Hatcher (1984), on Unix days.
pub mod hatcher {
    use super::{Date, JULIAN_DAY_ADJUSTMENT};

    pub fn to_date(unix_day: i32) -> Date<i32> {
        let j = unix_day + JULIAN_DAY_ADJUSTMENT;
        let g = (3 * ((4 * j - 17_918) / 146_097) + 2) / 4 - 37;
        let n = j + g;
        let a = 4 * n / 1461 - 4712;
        let day_of_year = (4 * n - 237) % 1461 / 4;
        let m = ((10 * day_of_year + 5) / 306 + 2) % 12 + 1;
        let d = (10 * day_of_year + 5) % 306 / 10 + 1;
        Date::new(a, m as u8, d as u8)
    }

    pub fn to_rata_die(date: Date<i32>) -> i32 {
        let (a, m, d) = (date.year, i32::from(date.month), i32::from(date.day));
        let january = m < 3;
        let a_prime = if january { a - 1 } else { a };
        let m_prime = if january { m + 9 } else { m - 3 };
        let y = 1461 * (a_prime + 4712) / 4;
        let days = (306 * m_prime + 5) / 10;
        let n = y + days + d + 59;
        let g = 3 * (a_prime / 100 + 49) / 4 - 38;
        n - g - JULIAN_DAY_ADJUSTMENT
    }
}

/// The algorithm of `boost::gregorian`, on Unix days.
pub mod boost {
    use super::{Date, JULIAN_DAY_ADJUSTMENT};

    pub fn to_date(unix_day: i32) -> Date<i32> {
        let a = (unix_day + 32_044 + JULIAN_DAY_ADJUSTMENT) as u32;
        let b = (4 * a + 3) / 146_097;
        let c = a - 146_097 * b / 4;
        let d = (4 * c + 3) / 1461;
        let e = c - 1461 * d / 4;
        let m = (5 * e + 2) / 153;
        let day = e - (153 * m + 2) / 5 + 1;
        let month = m + 3 - 12 * (m / 10);
        let year = (100 * b + d + m / 10) as i32 - 4800;
        Date::new(year, month as u8, day as u8)
    }

    pub fn to_rata_die(date: Date<i32>) -> i32 {
        let month = i32::from(date.month);
        let a = (14 - month) / 12;
        let y = date.year + 4800 - a;
        let m = month + 12 * a - 3;
        let d = i32::from(date.day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32_045;
        d - JULIAN_DAY_ADJUSTMENT
    }
}
