//! Classifies a block of loop-structured pseudocode into a [ComplexityClass] by its shape alone -- no measurements involved.\
//! Each loop multiplies the cost of its body by a factor (`n`, `log n` or `1`), nested loops add exponents and sequential
//! siblings keep the most expensive one. Self recursive functions are matched against a few well known patterns.\
//! Whatever can't be decided is reported as [EngineError::AmbiguousStructure] -- see [estimate_or_fallback()] for callers
//! needing a label anyway.

use std::{
    collections::HashSet,
    fmt::{Display, Formatter},
};
use tracing::debug;
use crate::{
    errors::{EngineError, EngineResult},
    estimation::code_structure::{parse_structure, CodeNode},
    growth::types::ComplexityClass,
};


/// The class reported, as a guess, when the structure can't be classified
pub const HEURISTIC_FALLBACK_CLASS: ComplexityClass = ComplexityClass::Quadratic;

/// names which, when called, don't count as "combine work" of a recursive function
const BUILTINS: [&str; 17] = ["if", "elif", "while", "for", "return", "and", "or", "not", "in",
                              "print", "len", "range", "min", "max", "abs", "int", "isinstance"];


/// `nᵈᵉᵍʳᵉᵉ · logˡᵒᵍ_ᵖᵒʷᵉʳ(n)` -- ordered by growth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub(crate) struct Cost {
    pub degree:    u32,
    pub log_power: u32,
}

impl Cost {
    pub const CONSTANT: Cost = Cost { degree: 0, log_power: 0 };
    pub const LOG:      Cost = Cost { degree: 0, log_power: 1 };
    pub const LINEAR:   Cost = Cost { degree: 1, log_power: 0 };

    /// the cost of running `inner` once for each of `self`'s iterations
    pub fn nest(self, inner: Cost) -> Cost {
        Cost { degree: self.degree + inner.degree, log_power: self.log_power + inner.log_power }
    }

    pub fn as_class(self) -> Option<ComplexityClass> {
        match (self.degree, self.log_power) {
            (0, 0) => Some(ComplexityClass::Constant),
            (0, 1) => Some(ComplexityClass::Logarithmic),
            (1, 0) => Some(ComplexityClass::Linear),
            (1, 1) => Some(ComplexityClass::Linearithmic),
            (2, 0) => Some(ComplexityClass::Quadratic),
            (3, 0) => Some(ComplexityClass::Cubic),
            _      => None,
        }
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let polynomial = match self.degree {
            0 => None,
            1 => Some("n".to_string()),
            degree => Some(format!("n^{degree}")),
        };
        let logarithm = match self.log_power {
            0 => None,
            1 => Some("log n".to_string()),
            power => Some(format!("log^{power} n")),
        };
        match (polynomial, logarithm) {
            (None, None)             => write!(f, "1"),
            (Some(p), None)          => write!(f, "{p}"),
            (None, Some(l))          => write!(f, "{l}"),
            (Some(p), Some(l)) => write!(f, "{p}·{l}"),
        }
    }
}


/// The outcome of [estimate_or_fallback()]
#[derive(Debug, Clone, PartialEq)]
pub enum StructuralEstimate {
    /// the structure was recognised
    Classified(ComplexityClass),
    /// the structure was ambiguous: `class` is a guess, not a proof
    Heuristic { class: ComplexityClass, reason: String },
}

impl StructuralEstimate {

    pub fn class(&self) -> ComplexityClass {
        match self {
            Self::Classified(class) | Self::Heuristic { class, .. } => *class,
        }
    }

    pub fn is_heuristic(&self) -> bool {
        matches!(self, Self::Heuristic { .. })
    }
}

impl Display for StructuralEstimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classified(class)         => write!(f, "{}", class.as_pretty_str()),
            Self::Heuristic { class, reason } => write!(f, "{} (heuristic guess -- {})", class.as_pretty_str(), reason),
        }
    }
}


/// Estimates the [ComplexityClass] of `code` from its loop nesting & recursion patterns:
///   - no loops, no recursion: [ComplexityClass::Constant] -- the empty block included;
///   - `for x in range(n)`, `for x in items` & `while` loops stepping by a constant: a factor of `n`;
///   - loops whose variable is halved or doubled (`i //= 2`, `i *= 2`, `lo = mid + 1` with `mid = (lo + hi) // 2`, ...): `log n`;
///   - loops over literal bounds (`range(10)`): a factor of `1`;
///   - a function calling itself twice on halves, plus some combine work: [ComplexityClass::Linearithmic];
///     once on a half: [ComplexityClass::Logarithmic]; once on `n - k`: [ComplexityClass::Linear];
///     twice or more on `n - k`: [ComplexityClass::ExponentialBounded].
///
/// Data dependent `while` bounds, costs with no named class (`n⁴`, `n²·log n`), unrecognised recursion and recursion mixed
/// with top-level loops are reported as [EngineError::AmbiguousStructure].
pub fn estimate(code: &str) -> EngineResult<ComplexityClass> {
    let structure = parse_structure(code)?;
    let top_level = block_cost(&structure)?;

    let functions: Vec<&CodeNode> = structure.iter()
        .flat_map(|node| std::iter::once(node).chain(node.descendants()))
        .filter(|node| node.function_name().is_some())
        .collect();
    let mut cost = top_level;
    let mut recursive_class = None;
    for function in functions {
        match recursion_class(function)? {
            Some(class) => recursive_class = recursive_class.max(Some(class)),
            None => cost = cost.max(block_cost(&function.children)?),
        }
    }

    if recursive_class.is_some() && top_level > Cost::CONSTANT {
        let line = structure.iter().find(|node| node.is_loop()).map_or(1, |node| node.line);
        return Err(EngineError::AmbiguousStructure { line, reason: "recursion mixed with top-level loops".to_string() });
    }
    let loops_class = cost.as_class()
        .ok_or_else(|| EngineError::AmbiguousStructure { line: 1, reason: format!("a cost of {cost} has no named class") })?;
    let class = recursive_class.map_or(loops_class, |recursive| recursive.max(loops_class));
    debug!(class = %class, loops_cost = %cost, recursive = recursive_class.is_some(), "structure classified");
    Ok(class)
}

/// Same as [estimate()], but surfacing ambiguous structures as a [StructuralEstimate::Heuristic] guess of
/// [HEURISTIC_FALLBACK_CLASS] instead of failing
pub fn estimate_or_fallback(code: &str) -> StructuralEstimate {
    match estimate(code) {
        Ok(class) => StructuralEstimate::Classified(class),
        Err(err) => {
            debug!(error = %err, "falling back to the heuristic class");
            StructuralEstimate::Heuristic { class: HEURISTIC_FALLBACK_CLASS, reason: err.to_string() }
        },
    }
}


/// the most expensive of the sibling `nodes` -- function definitions excluded
fn block_cost(nodes: &[CodeNode]) -> EngineResult<Cost> {
    nodes.iter()
        .filter(|node| node.function_name().is_none())
        .try_fold(Cost::CONSTANT, |cost, node| node_cost(node).map(|node_cost| cost.max(node_cost)))
}

fn node_cost(node: &CodeNode) -> EngineResult<Cost> {
    let body = block_cost(&node.children)?;
    if !node.is_loop() {
        return Ok(body);
    }
    let cost = loop_factor(node)?.nest(body);
    if cost.as_class().is_none() {
        return Err(EngineError::AmbiguousStructure { line: node.line, reason: format!("nesting reaches a cost of {cost}, which has no named class") });
    }
    Ok(cost)
}

fn loop_factor(node: &CodeNode) -> EngineResult<Cost> {
    let Some(header) = node.text.strip_prefix("for ") else {
        return while_factor(node);
    };
    let iterable = header.split_once(" in ").map_or(header, |(_, iterable)| iterable)
        .trim_end_matches(':')
        .trim();
    let bound = iterable.strip_prefix("range").unwrap_or(iterable);
    if identifiers(bound).next().is_none() {
        Ok(Cost::CONSTANT)
    } else {
        Ok(Cost::LINEAR)
    }
}

/// a `while` loop is bounded by the variables of its condition, which must be updated in its body
fn while_factor(node: &CodeNode) -> EngineResult<Cost> {
    let condition = node.text.trim_start_matches("while").trim_end_matches(':');
    let condition_variables: Vec<&str> = identifiers(condition)
        .filter(|identifier| !["and", "or", "not", "True", "False", "len"].contains(identifier))
        .collect();
    let updates: Vec<Update> = node.descendants().iter()
        .filter_map(|descendant| Update::parse(descendant.text))
        .collect();
    let geometric = geometric_variables(&updates);
    if condition_variables.iter().any(|variable| geometric.contains(variable)) {
        Ok(Cost::LOG)
    } else if updates.iter().any(|update| update.is_counted() && condition_variables.contains(&update.target)) {
        Ok(Cost::LINEAR)
    } else {
        Err(EngineError::AmbiguousStructure { line: node.line, reason: format!("the bound of '{}' is not recognisable", node.text) })
    }
}

/// classifies `function` if it calls itself -- `None` if it doesn't
fn recursion_class(function: &CodeNode) -> EngineResult<Option<ComplexityClass>> {
    let Some(name) = function.function_name() else {
        return Ok(None);
    };
    let body = function.descendants();
    let calls_per_line: Vec<(&CodeNode, Vec<&str>)> = body.iter()
        .filter_map(|node| {
            let arguments: Vec<&str> = calls_in(node.text).into_iter()
                .filter(|(callee, _)| *callee == name)
                .map(|(_, arguments)| arguments)
                .collect();
            (!arguments.is_empty()).then_some((*node, arguments))
        })
        .collect();
    if calls_per_line.is_empty() {
        return Ok(None);
    }

    let updates: Vec<Update> = body.iter().filter_map(|node| Update::parse(node.text)).collect();
    let geometric = geometric_variables(&updates);
    let halving = |arguments: &str| {
        let compacted = compact(arguments);
        ["//2", "/2", ">>1"].iter().any(|pattern| compacted.contains(pattern))
            || identifiers(arguments).any(|identifier| geometric.contains(identifier))
    };
    let decrementing = |arguments: &str| compact(arguments).split('-').skip(1).any(|operand| operand.starts_with(|c: char| c.is_ascii_digit()));

    // `return f(left)` on one branch & `return f(right)` on another: only one of them runs per invocation
    let alternatives = calls_per_line.iter().all(|(node, arguments)| node.text.starts_with("return") && arguments.len() == 1);
    let all_arguments: Vec<&str> = calls_per_line.iter().flat_map(|(_, arguments)| arguments.iter().copied()).collect();
    let calls_per_invocation = if alternatives { 1 } else { all_arguments.len() };
    let all_halving      = all_arguments.iter().all(|arguments| halving(arguments));
    let all_decrementing = !all_halving && all_arguments.iter().all(|arguments| decrementing(arguments));

    let loops = block_cost(&function.children)?;
    let helper_calls = body.iter()
        .flat_map(|node| calls_in(node.text))
        .any(|(callee, _)| callee != name && !BUILTINS.contains(&callee));
    let combines = loops >= Cost::LINEAR || helper_calls;

    let class = match (calls_per_invocation, all_halving, all_decrementing) {
        (2, true, _) if combines                  => ComplexityClass::Linearithmic,
        (1, true, _) if loops == Cost::CONSTANT   => ComplexityClass::Logarithmic,
        (1, _, true) if loops == Cost::CONSTANT   => ComplexityClass::Linear,
        (calls, _, true) if calls >= 2            => ComplexityClass::ExponentialBounded,
        _ => return Err(EngineError::AmbiguousStructure { line: function.line, reason: format!("unrecognised recursion pattern in '{name}'") }),
    };
    debug!(function = name, class = %class, calls_per_invocation, "recursion classified");
    Ok(Some(class))
}


/// An assignment to a plain variable: `target operator rhs`
#[derive(Debug, Clone, Copy, PartialEq)]
struct Update<'a> {
    target:   &'a str,
    operator: &'static str,
    rhs:      &'a str,
}

impl<'a> Update<'a> {

    fn parse(text: &'a str) -> Option<Self> {
        const OPERATORS: [&str; 8] = ["//=", ">>=", "<<=", "+=", "-=", "*=", "/=", "="];
        let target_len = text.find(|c: char| !is_identifier_char(c)).unwrap_or(text.len());
        let (target, rest) = text.split_at(target_len);
        if target.is_empty() {
            return None;
        }
        let rest = rest.trim_start();
        let operator = *OPERATORS.iter().find(|operator| rest.starts_with(**operator))?;
        let rhs = rest[operator.len()..].trim();
        // `==` is a comparison
        if operator == "=" && rhs.starts_with('=') {
            return None;
        }
        Some(Self { target, operator, rhs })
    }

    /// halves or doubles its target
    fn is_geometric(&self) -> bool {
        let rhs = compact(self.rhs);
        match self.operator {
            "//=" | "/=" | "*=" => rhs == "2",
            ">>=" | "<<="       => rhs == "1",
            "="                 => ["//2", "/2", "*2", ">>1", "<<1"].iter().any(|pattern| rhs.contains(pattern)),
            _                   => false,
        }
    }

    /// steps its target by a constant
    fn is_counted(&self) -> bool {
        match self.operator {
            "+=" | "-=" => is_integer(&compact(self.rhs)),
            "="         => self.follows() == Some(self.target) && compact(self.rhs) != self.target,
            _           => false,
        }
    }

    /// for `lo = mid + 1`, the `mid` this update moves its target to
    fn follows(&self) -> Option<&'a str> {
        if self.operator != "=" {
            return None;
        }
        let head_len = self.rhs.find(|c: char| !is_identifier_char(c)).unwrap_or(self.rhs.len());
        let (head, tail) = self.rhs.split_at(head_len);
        let tail = compact(tail);
        let offset = tail.strip_prefix('+').or_else(|| tail.strip_prefix('-'));
        let is_variable = head.starts_with(|c: char| c.is_alphabetic() || c == '_');
        (is_variable && (tail.is_empty() || offset.is_some_and(is_integer))).then_some(head)
    }
}

/// variables halved or doubled by `updates` -- directly or by following another such variable
fn geometric_variables<'a>(updates: &[Update<'a>]) -> HashSet<&'a str> {
    let mut geometric: HashSet<&str> = updates.iter()
        .filter(|update| update.is_geometric())
        .map(|update| update.target)
        .collect();
    loop {
        let known = geometric.len();
        for update in updates {
            if update.follows().is_some_and(|source| geometric.contains(source)) {
                geometric.insert(update.target);
            }
        }
        if geometric.len() == known {
            break geometric;
        }
    }
}

/// `(callee, arguments)` for each function call in `text` -- method calls excluded
fn calls_in(text: &str) -> Vec<(&str, &str)> {
    let mut calls = Vec::new();
    for (open, _) in text.match_indices('(') {
        let prefix = text[..open].trim_end_matches(is_identifier_char);
        let callee = &text[prefix.len()..open];
        if callee.is_empty() || prefix.ends_with('.') || callee.starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }
        let mut depth = 0;
        let close = text[open..].char_indices().find_map(|(offset, c)| {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(open + offset);
                    }
                },
                _ => {},
            }
            None
        });
        let arguments = close.map_or(&text[open + 1..], |close| &text[open + 1..close]);
        calls.push((callee, arguments));
    }
    calls
}

fn identifiers(text: &str) -> impl Iterator<Item=&str> {
    text.split(|c: char| !is_identifier_char(c))
        .filter(|token| token.starts_with(|c: char| c.is_alphabetic() || c == '_'))
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_integer(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

fn compact(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
