use crate::domain::model::QuerySet;
use crate::utils::error::{CheckError, Result};
use regex::Regex;
use std::io::Read;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,]+").expect("separator pattern is valid"));

pub const USAGE: &str = "No numbers to check were given\n\
                         Usage: check_status number1 number2 number3 ...\n\
                         Or: echo 'number1 number2' | check_status";

/// Arguments take priority; stdin is only read when there are none.
pub fn collect_numbers<R: Read>(args: &[String], mut stdin: R) -> Result<QuerySet> {
    let numbers = if args.is_empty() {
        let mut input = String::new();
        stdin.read_to_string(&mut input)?;
        tracing::debug!("Read {} bytes of numbers from stdin", input.len());
        split_numbers(&input)
    } else {
        QuerySet::from_candidates(args)
    };

    if numbers.is_empty() {
        return Err(CheckError::usage(USAGE));
    }

    tracing::debug!("Checking {} distinct numbers", numbers.len());
    Ok(numbers)
}

/// Splits on runs of whitespace and/or commas.
pub fn split_numbers(input: &str) -> QuerySet {
    QuerySet::from_candidates(SEPARATORS.split(input))
}
