//! Finds the dominant term of cost expressions such as `3*n**2 + 2*n + 1`, dropping constants & lower order terms.

use crate::{
    errors::{EngineError, EngineResult},
    estimation::estimator::Cost,
    growth::types::ComplexityClass,
};


/// the growth of a product of factors -- any exponential factor dominates every polynomial one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TermGrowth {
    exponential: bool,
    cost:        Cost,
}

/// Returns the [ComplexityClass] of the fastest growing term of `expression`.\
/// Terms are summed or subtracted and are made of factors joined by `*` (or juxtaposed to a leading coefficient, as in `3n`):
/// numbers, `n`, `n**k` / `n^k` / `n²` / `n³` (`k` in `0..=3`), `log(n)`, `log2(n)`, `ln(n)` and `2**n` (any base above 1).\
/// Anything else is reported as [EngineError::UnparsableExpression].
pub fn dominant_term(expression: &str) -> EngineResult<ComplexityClass> {
    let unparsable = |reason: String| EngineError::UnparsableExpression { expression: expression.to_string(), reason };
    let normalized: String = expression.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace("**", "^")
        .replace('²', "^2")
        .replace('³', "^3");
    if normalized.is_empty() {
        return Err(unparsable("empty expression".to_string()));
    }

    let mut dominant: Option<TermGrowth> = None;
    for term in split_terms(&normalized).map_err(&unparsable)? {
        let growth = term_growth(term).map_err(&unparsable)?;
        dominant = dominant.max(growth);
    }
    let Some(dominant) = dominant else {
        return Ok(ComplexityClass::Constant);
    };
    if dominant.exponential {
        return Ok(ComplexityClass::ExponentialBounded);
    }
    dominant.cost.as_class()
        .ok_or_else(|| unparsable(format!("the dominant term grows as {}, which has no named class", dominant.cost)))
}

/// splits on the `+` & `-` outside of parentheses
fn split_terms(expression: &str) -> Result<Vec<&str>, String> {
    let mut terms = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (position, c) in expression.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            '+' | '-' if depth == 0 => {
                let term = &expression[start..position];
                // a leading sign opens the expression with an empty term
                if term.is_empty() && position > 0 {
                    return Err(format!("missing term before '{c}' at position {position}"));
                }
                if !term.is_empty() {
                    terms.push(term);
                }
                start = position + c.len_utf8();
            },
            _ => {},
        }
        if depth < 0 {
            return Err(format!("unbalanced ')' at position {position}"));
        }
    }
    if depth != 0 {
        return Err("unbalanced '('".to_string());
    }
    let last = &expression[start..];
    if last.is_empty() {
        return Err("dangling operator at the end".to_string());
    }
    terms.push(last);
    Ok(terms)
}

/// `None` for terms multiplied by zero
fn term_growth(term: &str) -> Result<Option<TermGrowth>, String> {
    let mut growth = TermGrowth { exponential: false, cost: Cost::CONSTANT };
    for factor in term.split('*') {
        if factor.is_empty() {
            return Err(format!("empty factor in '{term}'"));
        }
        if let Ok(value) = factor.parse::<f64>() {
            if value == 0.0 {
                return Ok(None);
            }
            continue;
        }
        // `3n^2` is `3 * n^2` -- but `2^n` is a power
        let factor = match factor.find(|c: char| !(c.is_ascii_digit() || c == '.')) {
            Some(split) if split > 0 && !factor[split..].starts_with('^') => {
                match factor[..split].parse::<f64>() {
                    Ok(coefficient) if coefficient == 0.0 => return Ok(None),
                    Ok(_)  => &factor[split..],
                    Err(_) => return Err(format!("unrecognised coefficient in '{factor}'")),
                }
            },
            _ => factor,
        };
        let factor = factor_growth(factor)
            .ok_or_else(|| format!("unrecognised factor '{factor}'"))?;
        growth.exponential |= factor.exponential;
        growth.cost = growth.cost.nest(factor.cost);
    }
    Ok(Some(growth))
}

fn factor_growth(factor: &str) -> Option<TermGrowth> {
    let polynomial = |degree| TermGrowth { exponential: false, cost: Cost { degree, log_power: 0 } };
    match factor {
        "n" => Some(polynomial(1)),
        "log(n)" | "log2(n)" | "log10(n)" | "ln(n)" => Some(TermGrowth { exponential: false, cost: Cost::LOG }),
        _ => {
            let (base, exponent) = factor.split_once('^')?;
            if base == "n" {
                exponent.parse::<u32>().ok()
                    .filter(|degree| *degree <= 3)
                    .map(polynomial)
            } else if exponent == "n" {
                base.parse::<f64>().ok()
                    .filter(|base| *base > 1.0)
                    .map(|_| TermGrowth { exponential: true, cost: Cost::CONSTANT })
            } else {
                None
            }
        },
    }
}
