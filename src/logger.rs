//! Diagnostic sinks for the intermediate values of a calculation.
//!
//! A [`Logger`] is handed to each calculation explicitly; there is no global logging state.
//! The default [`NullLogger`] discards everything, and no sink can influence the result.
//!
//! # Example
//! ```
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use std::cell::RefCell;
//! use sunriseset::{FnLogger, SunCalculator, Zenith};
//!
//! let lines = RefCell::new(Vec::new());
//! let calculator = SunCalculator::with_logger(FnLogger::new(|args| {
//!     lines.borrow_mut().push(args.to_string());
//! }));
//!
//! let date = NaiveDate::from_ymd_opt(2019, 12, 29).unwrap();
//! let _ = calculator.sunrise_instant(date, Zenith::Official, 51.623556, 0.010213);
//!
//! assert_eq!(lines.borrow()[0], "Day of year = 363");
//! # }
//! ```

use core::fmt;

/// A sink for formatted diagnostic messages.
///
/// Implementations shared between threads must be `Sync` themselves; the calculation only ever
/// takes `&self`.
pub trait Logger {
    /// Emits one formatted message.
    fn log(&self, args: fmt::Arguments<'_>);

    /// Emits an empty line, used to separate consecutive calculations.
    fn blank(&self) {
        self.log(format_args!(""));
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, args: fmt::Arguments<'_>) {
        (**self).log(args);
    }

    fn blank(&self) {
        (**self).blank();
    }
}

/// Discards all messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullLogger;

impl Logger for NullLogger {
    #[inline]
    fn log(&self, _args: fmt::Arguments<'_>) {}
}

/// Prints each message as a line on standard output.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleLogger;

#[cfg(feature = "std")]
impl Logger for ConsoleLogger {
    fn log(&self, args: fmt::Arguments<'_>) {
        println!("{args}");
    }
}

/// Forwards messages to `tracing` as `DEBUG` events with target `sunriseset`.
///
/// Blank separator lines are dropped.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingLogger;

#[cfg(feature = "tracing")]
impl Logger for TracingLogger {
    fn log(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(target: "sunriseset", "{}", args);
    }

    fn blank(&self) {}
}

/// Adapts a closure into a [`Logger`].
#[derive(Debug, Clone, Copy)]
pub struct FnLogger<F>(pub F);

impl<F> FnLogger<F>
where
    F: Fn(fmt::Arguments<'_>),
{
    /// Wraps `f`, letting the compiler infer the closure's argument type.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Logger for FnLogger<F>
where
    F: Fn(fmt::Arguments<'_>),
{
    fn log(&self, args: fmt::Arguments<'_>) {
        (self.0)(args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_fn_logger_counts_messages() {
        let count = Cell::new(0);
        let logger = FnLogger::new(|_args| count.set(count.get() + 1));

        fn emit(logger: impl Logger) {
            logger.log(format_args!("y"));
        }

        logger.log(format_args!("x = {}", 1));
        logger.blank();
        emit(&logger);

        assert_eq!(count.get(), 3);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_blank_line_is_empty_message() {
        use std::cell::RefCell;

        let lines = RefCell::new(Vec::new());
        let logger = FnLogger::new(|args| lines.borrow_mut().push(args.to_string()));

        logger.log(format_args!("H = {:.6}", 7.5));
        logger.blank();

        assert_eq!(*lines.borrow(), vec!["H = 7.500000".to_string(), String::new()]);
    }

    #[test]
    fn test_null_logger_accepts_everything() {
        NullLogger.log(format_args!("ignored {}", 42));
        NullLogger.blank();
    }
}
