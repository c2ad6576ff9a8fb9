//! `eaf` converts between rata dies and dates and synthesizes fast EAFs.
//!
//! ```text
//! eaf to-date 719468
//! eaf to-rata-die 1970 1 1 --variant unix --width 32
//! eaf fast-eaf down 5 461 153 16
//! eaf info --json
//! ```
//!
//! Values outside the selected converter's limits are rejected and the
//! process exits with a non-zero status.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use derive_more::Display;
use eaf_calendar::{
    Calendar, CalendarKind, Date, Gregorian, GregorianOpt, Int, Julian, RangeError, Rounding,
    SynthesisError, Width, synthesize,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "eaf", version, about = "Calendar conversions with Euclidean affine functions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Date of a rata die.
    #[command(allow_negative_numbers = true)]
    ToDate {
        rata_die: i64,

        #[command(flatten)]
        converter: ConverterArgs,
    },

    /// Rata die of a date.
    #[command(allow_negative_numbers = true)]
    ToRataDie {
        year:  i64,
        month: u8,
        day:   u8,

        #[command(flatten)]
        converter: ConverterArgs,
    },

    /// Fast EAF equivalent to (a * n + b) / d for each exponent k.
    #[command(allow_negative_numbers = true)]
    FastEaf {
        rounding: RoundingArg,
        a:        u64,
        b:        i64,
        d:        u64,
        #[arg(required = true)]
        k:        Vec<u32>,
    },

    /// Limits of every converter.
    Info {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct ConverterArgs {
    #[arg(long, value_enum, default_value_t = CalendarArg::Gregorian)]
    calendar: CalendarArg,

    #[arg(long, value_enum, default_value_t = Variant::Canonical)]
    variant: Variant,

    #[arg(long, value_enum, default_value_t = WidthArg::W64)]
    width: WidthArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum CalendarArg {
    Julian,
    Gregorian,
}

/// Formula family of a converter.
#[derive(Clone, Copy, PartialEq, Eq, Display, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Variant {
    /// Canonical formulas counting from 1 March 0000.
    #[display(fmt = "canonical")]
    Canonical,
    /// Optimized Gregorian formulas counting from 1 March 0000.
    #[display(fmt = "optimized")]
    Optimized,
    /// Optimized Gregorian formulas counting from 1 January 1970.
    #[display(fmt = "unix")]
    Unix,
}

#[derive(Clone, Copy, ValueEnum)]
enum WidthArg {
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoundingArg {
    Up,
    Down,
}

impl From<RoundingArg> for Rounding {
    fn from(rounding: RoundingArg) -> Self {
        match rounding {
            RoundingArg::Up => Self::Up,
            RoundingArg::Down => Self::Down,
        }
    }
}

/// The converters selectable from the command line.
enum Converter<T> {
    Julian,
    Gregorian,
    Optimized(GregorianOpt<T>),
}

impl<T: Int> Converter<T> {
    fn new(calendar: CalendarArg, variant: Variant) -> Result<Self> {
        Ok(match (calendar, variant) {
            (CalendarArg::Julian, Variant::Canonical) => Self::Julian,
            (CalendarArg::Julian, _) => bail!("the {variant} variant exists for the Gregorian calendar only"),
            (CalendarArg::Gregorian, Variant::Canonical) => Self::Gregorian,
            (CalendarArg::Gregorian, Variant::Optimized) => Self::Optimized(GregorianOpt::default()),
            (CalendarArg::Gregorian, Variant::Unix) => Self::Optimized(GregorianOpt::unix()),
        })
    }

    fn to_date(&self, rata_die: T) -> Result<Date<T>, RangeError<T>> {
        match self {
            Self::Julian => Julian.checked_to_date(rata_die),
            Self::Gregorian => Gregorian.checked_to_date(rata_die),
            Self::Optimized(calendar) => calendar.checked_to_date(rata_die),
        }
    }

    fn to_rata_die(&self, date: Date<T>) -> Result<T, RangeError<T>> {
        match self {
            Self::Julian => Julian.checked_to_rata_die(date),
            Self::Gregorian => Gregorian.checked_to_rata_die(date),
            Self::Optimized(calendar) => calendar.checked_to_rata_die(date),
        }
    }
}

fn write_conversion<T: Int>(out: &mut impl Write, rata_die: T, date: Date<T>) -> Result<()> {
    writeln!(out, "rata die = {rata_die}")?;
    writeln!(out, "date     = {date}")?;
    Ok(())
}

fn to_date<T: Int + TryFrom<i64>>(out: &mut impl Write, rata_die: i64, args: &ConverterArgs) -> Result<()> {
    let converter = Converter::<T>::new(args.calendar, args.variant)?;
    let rata_die = T::try_from(rata_die)
        .ok()
        .with_context(|| format!("rata die {rata_die} does not fit {} bits", T::WIDTH))?;
    let date = converter.to_date(rata_die)?;
    write_conversion(out, rata_die, date)
}

fn to_rata_die<T: Int + TryFrom<i64>>(
    out: &mut impl Write,
    year: i64,
    month: u8,
    day: u8,
    args: &ConverterArgs,
) -> Result<()> {
    let converter = Converter::<T>::new(args.calendar, args.variant)?;
    let year = T::try_from(year)
        .ok()
        .with_context(|| format!("year {year} does not fit {} bits", T::WIDTH))?;
    let date = Date::new(year, month, day);
    let rata_die = converter.to_rata_die(date)?;
    write_conversion(out, rata_die, date)
}

fn fast_eaf(
    out: &mut impl Write,
    err: &mut impl Write,
    rounding: Rounding,
    eaf: (u64, i64, u64),
    exponents: &[u32],
) -> Result<()> {
    let (a, b, d) = eaf;
    let mut first = true;
    for &k in exponents {
        let fast = match synthesize(rounding, a, b, d, k) {
            Ok(fast) => fast,
            Err(SynthesisError::ExponentOutOfRange(k)) => {
                writeln!(err, "skipping k = {k}: must be in [1, 64]")?;
                continue;
            },
            Err(source) => {
                return Err(source)
                    .with_context(|| format!("cannot synthesize ({a} * n + {b}) / {d} with k = {k}"));
            },
        };
        if !first {
            writeln!(out)?;
        }
        writeln!(out, "{fast}")?;
        first = false;
    }
    Ok(())
}

/// One line of `eaf info`, widened to `i64`.
#[derive(Serialize)]
struct LimitsRow {
    calendar:        CalendarKind,
    variant:         Variant,
    width:           Width,
    rata_die_min:    i64,
    rata_die_max:    i64,
    date_min:        Date<i64>,
    date_max:        Date<i64>,
    to_date_min:     Date<i64>,
    to_date_max:     Date<i64>,
    to_rata_die_min: i64,
    to_rata_die_max: i64,
}

fn widen_date<T: Into<i64>>(date: Date<T>) -> Date<i64> {
    Date::new(date.year.into(), date.month, date.day)
}

fn limits_row<T: Int + Into<i64>, C: Calendar<T>>(calendar: &C, variant: Variant) -> LimitsRow {
    let limits = calendar.limits();
    LimitsRow {
        calendar: C::KIND,
        variant,
        width: T::WIDTH,
        rata_die_min: limits.rata_die_min.into(),
        rata_die_max: limits.rata_die_max.into(),
        date_min: widen_date(limits.date_min),
        date_max: widen_date(limits.date_max),
        to_date_min: widen_date(calendar.to_date(limits.rata_die_min)),
        to_date_max: widen_date(calendar.to_date(limits.rata_die_max)),
        to_rata_die_min: calendar.to_rata_die(limits.date_min).into(),
        to_rata_die_max: calendar.to_rata_die(limits.date_max).into(),
    }
}

fn limits_rows() -> Vec<LimitsRow> {
    vec![
        limits_row::<i32, _>(&Julian, Variant::Canonical),
        limits_row::<i64, _>(&Julian, Variant::Canonical),
        limits_row::<i32, _>(&Gregorian, Variant::Canonical),
        limits_row::<i64, _>(&Gregorian, Variant::Canonical),
        limits_row(&GregorianOpt::<i32>::default(), Variant::Optimized),
        limits_row(&GregorianOpt::<i64>::default(), Variant::Optimized),
        limits_row(&GregorianOpt::<i32>::unix(), Variant::Unix),
        limits_row(&GregorianOpt::<i64>::unix(), Variant::Unix),
    ]
}

fn info(out: &mut impl Write, json: bool) -> Result<()> {
    let rows = limits_rows();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows).context("failed to serialize limits")?)?;
        return Ok(());
    }

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} {} {}-bit", row.calendar, row.variant, row.width)?;
        writeln!(out, "  rata die min = {:<22} to_date     = {}", row.rata_die_min, row.to_date_min)?;
        writeln!(out, "  rata die max = {:<22} to_date     = {}", row.rata_die_max, row.to_date_max)?;
        writeln!(out, "  date min     = {:<22} to_rata_die = {}", row.date_min.to_string(), row.to_rata_die_min)?;
        writeln!(out, "  date max     = {:<22} to_rata_die = {}", row.date_max.to_string(), row.to_rata_die_max)?;
    }
    Ok(())
}

fn run(cli: Cli, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::ToDate { rata_die, converter } => match converter.width {
            WidthArg::W32 => to_date::<i32>(out, rata_die, &converter),
            WidthArg::W64 => to_date::<i64>(out, rata_die, &converter),
        },
        Command::ToRataDie { year, month, day, converter } => match converter.width {
            WidthArg::W32 => to_rata_die::<i32>(out, year, month, day, &converter),
            WidthArg::W64 => to_rata_die::<i64>(out, year, month, day, &converter),
        },
        Command::FastEaf { rounding, a, b, d, k } => fast_eaf(out, err, rounding.into(), (a, b, d), &k),
        Command::Info { json } => info(out, json),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli, &mut io::stdout().lock(), &mut io::stderr().lock())
}
