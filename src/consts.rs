/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March, the first month of the computational year
pub const MARCH: u8 = 3;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by the calendar's leap rule)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in a 4-year Julian cycle
pub const DAYS_IN_4_YEARS: u32 = 1461;
/// Days in a 400-year Gregorian cycle
pub const DAYS_IN_400_YEARS: u32 = 146_097;
/// Years in a Gregorian cycle
pub const YEARS_IN_400_YEARS: u32 = 400;

/// Day count from 1 March 0000 to 1 January 1970 (proleptic Gregorian)
pub const UNIX_EPOCH: u32 = 719_468;
/// Number of 400-year cycles the Unix variant shifts by, keeping years down
/// to -32800 in the unsigned domain
pub const UNIX_CYCLES: u32 = 82;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u32 = YEARS_IN_400_YEARS;

// Fast EAF replacing `n / 1461` for `n < 28825529`: `2939745 * n >> 32`.
pub(crate) const YEAR_MULTIPLIER: u32 = 2_939_745;
pub(crate) const YEAR_SHIFT: u32 = 32;

// Fast EAF replacing `(5 * n + 461) / 153` for `n < 734`.
pub(crate) const MONTH_MULTIPLIER: u32 = 2141;
pub(crate) const MONTH_OFFSET: u32 = 197_913;
pub(crate) const MONTH_SHIFT: u32 = 16;

// Fast EAF replacing `(153 * m - 457) / 5` for `m < 34`.
pub(crate) const DAYS_BEFORE_MONTH_MULTIPLIER: u32 = 979;
pub(crate) const DAYS_BEFORE_MONTH_OFFSET: u32 = 2919;
pub(crate) const DAYS_BEFORE_MONTH_SHIFT: u32 = 5;

/// Day of the computational (March-based) year on which January 1 falls
pub(crate) const JANUARY_DAY_OF_YEAR: u32 = 306;
