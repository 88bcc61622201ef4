//! CSS Value Definition Syntax compiler.
//!
//! Grammar definitions are written the way the CSS specifications write them,
//! e.g. `<length-percentage>{1,4}` or `<line-width> || <line-style> || <color>`,
//! and compiled into a [`Term`] tree the matcher walks.
//! See <https://developer.mozilla.org/en-US/docs/Web/CSS/Value_definition_syntax>.

use std::fmt;

use nom::branch::alt;
use nom::bytes::complete::{tag, take_until, take_while};
use nom::character::complete::{char, digit1, multispace0, satisfy};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, value};
use nom::multi::{many1, separated_list1};
use nom::sequence::{delimited, pair, preceded, terminated};
use nom::IResult;

use crate::{Error, Result};

/// How the terms of a group combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// All terms, in order (space separated).
    Juxtaposition,
    /// `&&`: all terms, in any order.
    AllAnyOrder,
    /// `||`: at least one term, in any order.
    AtLeastOneAnyOrder,
    /// `|`: exactly one term.
    ExactlyOne,
}

/// A compiled value definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A literal keyword such as `auto`.
    Keyword(String),
    /// A type reference, `<name>`.
    Type(String),
    /// A property reference, `<'name'>`.
    Property(String),
    /// A functional notation, `name( arguments )`.
    Function { name: String, arguments: Box<Term> },
    /// A literal `,` or `/`.
    Literal(char),
    Group {
        combinator: Combinator,
        terms: Vec<Term>,
    },
    /// A multiplied term. `comma` is set for `#` repetitions.
    Repeat {
        term: Box<Term>,
        min: usize,
        max: Option<usize>,
        comma: bool,
    },
}

impl Term {
    /// Check if this term can match without consuming input.
    pub(crate) fn is_nullable(&self) -> bool {
        match self {
            Term::Repeat { term, min, .. } => *min == 0 || term.is_nullable(),
            Term::Group {
                combinator: Combinator::Juxtaposition | Combinator::AllAnyOrder,
                terms,
            } => terms.iter().all(Term::is_nullable),
            Term::Group {
                combinator: Combinator::ExactlyOne,
                terms,
            } => terms.iter().any(Term::is_nullable),
            _ => false,
        }
    }

    /// The term count of the largest `&&` or `||` group.
    pub(crate) fn widest_any_order_group(&self) -> usize {
        match self {
            Term::Group { combinator, terms } => {
                let own = match combinator {
                    Combinator::AllAnyOrder | Combinator::AtLeastOneAnyOrder => terms.len(),
                    Combinator::Juxtaposition | Combinator::ExactlyOne => 0,
                };
                terms
                    .iter()
                    .map(Term::widest_any_order_group)
                    .fold(own, usize::max)
            }
            Term::Function { arguments, .. } => arguments.widest_any_order_group(),
            Term::Repeat { term, .. } => term.widest_any_order_group(),
            Term::Keyword(_) | Term::Type(_) | Term::Property(_) | Term::Literal(_) => 0,
        }
    }

    /// Collect every `<type>` this term refers to.
    pub(crate) fn type_references<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Term::Type(name) => out.push(name),
            Term::Function { arguments, .. } => arguments.type_references(out),
            Term::Group { terms, .. } => terms.iter().for_each(|term| term.type_references(out)),
            Term::Repeat { term, .. } => term.type_references(out),
            Term::Keyword(_) | Term::Property(_) | Term::Literal(_) => {}
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Keyword(name) => f.write_str(name),
            Term::Type(name) => write!(f, "<{}>", name),
            Term::Property(name) => write!(f, "<'{}'>", name),
            Term::Function { name, arguments } => write!(f, "{}( {} )", name, arguments),
            Term::Literal(c) => write!(f, "{}", c),
            Term::Group { combinator, terms } => {
                let separator = match combinator {
                    Combinator::Juxtaposition => " ",
                    Combinator::AllAnyOrder => " && ",
                    Combinator::AtLeastOneAnyOrder => " || ",
                    Combinator::ExactlyOne => " | ",
                };
                f.write_str("[ ")?;
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(separator)?;
                    }
                    write!(f, "{}", term)?;
                }
                f.write_str(" ]")
            }
            Term::Repeat {
                term,
                min,
                max,
                comma,
            } => {
                write!(f, "{}", term)?;
                match (comma, min, max) {
                    (false, 0, Some(1)) => f.write_str("?"),
                    (false, 0, None) => f.write_str("*"),
                    (false, 1, None) => f.write_str("+"),
                    (true, 1, None) => f.write_str("#"),
                    (comma, min, Some(max)) if min == max => {
                        write!(f, "{}{{{}}}", if *comma { "#" } else { "" }, min)
                    }
                    (comma, min, Some(max)) => {
                        write!(f, "{}{{{},{}}}", if *comma { "#" } else { "" }, min, max)
                    }
                    (comma, min, None) => write!(f, "{}{{{},}}", if *comma { "#" } else { "" }, min),
                }
            }
        }
    }
}

/// Compile a value definition.
///
/// # Errors
///
/// Returns [`Error::InvalidSyntax`] when the definition is malformed or has
/// trailing input.
pub fn parse_definition(source: &str) -> Result<Term> {
    match all_consuming(ws(one_of))(source) {
        Ok((_, term)) => Ok(term),
        Err(e) => Err(Error::invalid_syntax(source, e.to_string())),
    }
}

/// Wrap `terms` in a group unless there is only one.
fn group(combinator: Combinator, mut terms: Vec<Term>) -> Term {
    if terms.len() == 1 {
        terms.remove(0)
    } else {
        Term::Group { combinator, terms }
    }
}

/// Removes surrounding whitespace from a parser
fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Keyword and type names: letters, digits and dashes, not starting with a digit.
fn name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '-'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '-'),
    ))(input)
}

fn integer(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>)(input)
}

/// `<type>`, `<type()>`, `<type [min,max]>` or `<'property'>`.
fn type_reference(input: &str) -> IResult<&str, Term> {
    let property = map(delimited(char('\''), name, char('\'')), |name: &str| {
        Term::Property(name.to_ascii_lowercase())
    });
    // Value ranges are not enforced
    let range = preceded(multispace0, delimited(char('['), take_until("]"), char(']')));
    let data_type = map(
        terminated(recognize(pair(name, opt(tag("()")))), opt(range)),
        |name: &str| Term::Type(name.to_ascii_lowercase()),
    );
    delimited(char('<'), alt((property, data_type)), char('>'))(input)
}

/// `name( arguments )`
fn function(input: &str) -> IResult<&str, Term> {
    let (input, name) = terminated(name, char('('))(input)?;
    let (input, arguments) = opt(ws(one_of))(input)?;
    let (input, _) = preceded(multispace0, char(')'))(input)?;

    let arguments = arguments.unwrap_or(Term::Group {
        combinator: Combinator::Juxtaposition,
        terms: vec![],
    });
    Ok((
        input,
        Term::Function {
            name: name.to_ascii_lowercase(),
            arguments: Box::new(arguments),
        },
    ))
}

/// `[ ... ]`
fn bracketed(input: &str) -> IResult<&str, Term> {
    delimited(char('['), ws(one_of), char(']'))(input)
}

fn atom(input: &str) -> IResult<&str, Term> {
    alt((
        type_reference,
        bracketed,
        function,
        map(alt((char(','), char('/'))), Term::Literal),
        map(name, |name: &str| Term::Keyword(name.to_ascii_lowercase())),
    ))(input)
}

/// `{m}`, `{m,}` or `{m,n}`
fn range(input: &str) -> IResult<&str, (usize, Option<usize>)> {
    map(
        delimited(
            char('{'),
            pair(ws(integer), opt(preceded(char(','), opt(ws(integer))))),
            char('}'),
        ),
        |(min, rest)| match rest {
            None => (min, Some(min)),
            Some(None) => (min, None),
            Some(Some(max)) => (min, Some(max)),
        },
    )(input)
}

/// Multipliers as `(min, max, comma separated)`.
fn multiplier(input: &str) -> IResult<&str, Option<(usize, Option<usize>, bool)>> {
    opt(alt((
        value((0, None, false), char('*')),
        value((1, None, false), char('+')),
        value((0, Some(1), false), char('?')),
        map(preceded(char('#'), opt(range)), |range| {
            let (min, max) = range.unwrap_or((1, None));
            (min, max, true)
        }),
        map(range, |(min, max)| (min, max, false)),
    )))(input)
}

fn component(input: &str) -> IResult<&str, Term> {
    let (input, term) = atom(input)?;
    let (input, multiplier) = multiplier(input)?;
    // `!` (required group) does not change matching here
    let (input, _) = opt(char('!'))(input)?;

    let term = match multiplier {
        Some((min, max, comma)) => Term::Repeat {
            term: Box::new(term),
            min,
            max,
            comma,
        },
        None => term,
    };
    Ok((input, term))
}

fn juxtaposition(input: &str) -> IResult<&str, Term> {
    map(many1(ws(component)), |terms| {
        group(Combinator::Juxtaposition, terms)
    })(input)
}

fn all_any_order(input: &str) -> IResult<&str, Term> {
    map(separated_list1(ws(tag("&&")), juxtaposition), |terms| {
        group(Combinator::AllAnyOrder, terms)
    })(input)
}

fn at_least_one_any_order(input: &str) -> IResult<&str, Term> {
    map(separated_list1(ws(tag("||")), all_any_order), |terms| {
        group(Combinator::AtLeastOneAnyOrder, terms)
    })(input)
}

fn one_of(input: &str) -> IResult<&str, Term> {
    map(separated_list1(ws(tag("|")), at_least_one_any_order), |terms| {
        group(Combinator::ExactlyOne, terms)
    })(input)
}
