//! Recursive descent parser for a Python statement subset.
//!
//! Works over a stream of logical lines: physical lines with comments
//! stripped, blank lines dropped, and bracket/backslash continuations joined.
//! Statements are recognized by leading keyword; block structure comes from
//! indentation. Compound statements the builders ignore (`try`, `with`,
//! `match`, `async def`, ...) have their bodies skipped textually, so unknown
//! constructs inside them never fail the parse.

use super::ast::{Assign, Call, ClassDef, Expr, For, FunctionDef, If, Return, Stmt, Suite, While};
use crate::sanitize::is_identifier;

/// Simple-statement keywords that carry no diagram information.
const SIMPLE_KEYWORDS: &[&str] = &[
    "pass", "break", "continue", "import", "from", "raise", "del", "assert", "global", "nonlocal",
    "yield",
];

/// Compound-statement keywords whose bodies are consumed and discarded.
const OPAQUE_COMPOUNDS: &[&str] = &["try", "except", "finally", "with", "match", "async"];

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unclosed bracket starting on line {0}")]
    UnclosedBracket(usize),
    #[error("unmatched closing bracket on line {0}")]
    UnmatchedBracket(usize),
    #[error("unterminated string literal on line {0}")]
    UnterminatedString(usize),
    #[error("unexpected indent on line {0}")]
    UnexpectedIndent(usize),
    #[error("expected an indented block after line {0}")]
    ExpectedBlock(usize),
    #[error("missing ':' in {kind} statement on line {line}")]
    MissingColon { kind: &'static str, line: usize },
    #[error("invalid {kind} header on line {line}")]
    InvalidHeader { kind: &'static str, line: usize },
    #[error("'{keyword}' without a matching statement on line {line}")]
    DanglingClause { keyword: &'static str, line: usize },
}

/// Parse Python source into a statement tree.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first structural problem found:
/// unbalanced brackets, inconsistent indentation, a compound statement
/// missing its `:` or its indented block, or a dangling `elif`/`else`.
pub fn parse(source: &str) -> Result<Suite, ParseError> {
    let lines = logical_lines(source)?;
    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let mut pos = 0;
    let base = lines[0].indent;
    let suite = parse_suite(&lines, &mut pos, base)?;
    if pos < lines.len() {
        return Err(ParseError::UnexpectedIndent(lines[pos].number));
    }
    Ok(suite)
}

// =============================================================================
// LOGICAL LINES
// =============================================================================

/// One logical source line: leading indent (in columns), trimmed text with
/// comments removed, and the physical line number it started on.
struct Line {
    indent: usize,
    text: String,
    number: usize,
}

/// Split source into logical lines, joining bracket, backslash and
/// triple-quoted-string continuations and dropping blanks and comments.
fn logical_lines(source: &str) -> Result<Vec<Line>, ParseError> {
    let mut out: Vec<Line> = Vec::new();
    let mut current: Option<Line> = None;
    let mut scanner = Scanner::new();

    for (idx, raw) in source.lines().enumerate() {
        let number = idx + 1;
        let (scanned, dipped) = scanner.scan(raw);
        if dipped {
            return Err(ParseError::UnmatchedBracket(number));
        }
        if scanner.in_single_quote() {
            return Err(ParseError::UnterminatedString(number));
        }
        let in_triple = scanner.in_triple_quote();

        let mut content = scanned.trim_end().to_owned();
        let continuation = !in_triple && content.ends_with('\\');
        if continuation {
            content.pop();
            content.truncate(content.trim_end().len());
        }

        match current.as_mut() {
            Some(line) => {
                let piece = content.trim();
                if !piece.is_empty() {
                    if !line.text.is_empty() {
                        line.text.push(' ');
                    }
                    line.text.push_str(piece);
                }
            }
            None => {
                if content.trim().is_empty() {
                    continue;
                }
                current = Some(Line {
                    indent: indent_width(&content),
                    text: content.trim().to_owned(),
                    number,
                });
            }
        }

        if scanner.depth > 0 || continuation || in_triple {
            continue;
        }
        if let Some(line) = current.take() {
            out.push(line);
        }
    }

    let start = current.as_ref().map_or(1, |l| l.number);
    if scanner.in_triple_quote() {
        return Err(ParseError::UnterminatedString(start));
    }
    if scanner.depth > 0 {
        return Err(ParseError::UnclosedBracket(start));
    }
    if let Some(line) = current.take() {
        out.push(line);
    }
    Ok(out)
}

/// Line scanner with state carried across physical lines: bracket depth and
/// an open string literal (triple-quoted strings span lines).
struct Scanner {
    depth: i32,
    /// Open string literal: quote character and whether it is triple-quoted.
    quote: Option<(char, bool)>,
}

impl Scanner {
    fn new() -> Self {
        Self { depth: 0, quote: None }
    }

    fn in_single_quote(&self) -> bool {
        matches!(self.quote, Some((_, false)))
    }

    fn in_triple_quote(&self) -> bool {
        matches!(self.quote, Some((_, true)))
    }

    /// Scan one physical line: strips an unquoted `#` comment, updates
    /// bracket depth and string state. Returns the kept content and whether
    /// depth went below zero.
    fn scan(&mut self, raw: &str) -> (String, bool) {
        let cs: Vec<char> = raw.chars().collect();
        let mut content = String::with_capacity(raw.len());
        let mut dipped = false;
        let mut i = 0;

        while i < cs.len() {
            let c = cs[i];
            if let Some((q, triple)) = self.quote {
                content.push(c);
                if c == '\\' {
                    if let Some(&escaped) = cs.get(i + 1) {
                        content.push(escaped);
                    }
                    i += 2;
                    continue;
                }
                if c == q {
                    if !triple {
                        self.quote = None;
                    } else if cs.get(i + 1) == Some(&q) && cs.get(i + 2) == Some(&q) {
                        content.push(q);
                        content.push(q);
                        i += 3;
                        self.quote = None;
                        continue;
                    }
                }
                i += 1;
                continue;
            }
            match c {
                '#' => break,
                '\'' | '"' => {
                    if cs.get(i + 1) == Some(&c) && cs.get(i + 2) == Some(&c) {
                        content.push(c);
                        content.push(c);
                        content.push(c);
                        self.quote = Some((c, true));
                        i += 3;
                    } else {
                        content.push(c);
                        self.quote = Some((c, false));
                        i += 1;
                    }
                }
                '(' | '[' | '{' => {
                    self.depth += 1;
                    content.push(c);
                    i += 1;
                }
                ')' | ']' | '}' => {
                    self.depth -= 1;
                    if self.depth < 0 {
                        dipped = true;
                    }
                    content.push(c);
                    i += 1;
                }
                _ => {
                    content.push(c);
                    i += 1;
                }
            }
        }

        (content, dipped)
    }
}

/// Leading whitespace width in columns; a tab advances to the next multiple
/// of eight, matching CPython's tokenizer.
fn indent_width(s: &str) -> usize {
    let mut width = 0;
    for c in s.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width = (width / 8 + 1) * 8,
            _ => break,
        }
    }
    width
}

// =============================================================================
// STATEMENTS
// =============================================================================

/// Parse statements at exactly `indent`, stopping on dedent.
fn parse_suite(lines: &[Line], pos: &mut usize, indent: usize) -> Result<Vec<Stmt>, ParseError> {
    let mut stmts = Vec::new();
    while *pos < lines.len() {
        let line = &lines[*pos];
        if line.indent < indent {
            break;
        }
        if line.indent > indent {
            return Err(ParseError::UnexpectedIndent(line.number));
        }
        parse_stmt(lines, pos, &mut stmts)?;
    }
    Ok(stmts)
}

/// Parse one statement (compound statements consume their bodies), pushing
/// the result onto `out`. A `;`-joined simple line pushes several.
fn parse_stmt(lines: &[Line], pos: &mut usize, out: &mut Vec<Stmt>) -> Result<(), ParseError> {
    let line = &lines[*pos];
    let text = line.text.as_str();

    if let Some(rest) = keyword(text, "def") {
        out.push(parse_function_def(lines, pos, rest)?);
        return Ok(());
    }
    if let Some(rest) = keyword(text, "class") {
        out.push(parse_class_def(lines, pos, rest)?);
        return Ok(());
    }
    if let Some(rest) = keyword(text, "if") {
        out.push(parse_if(lines, pos, rest)?);
        return Ok(());
    }
    if let Some(rest) = keyword(text, "while") {
        out.push(parse_while(lines, pos, rest)?);
        return Ok(());
    }
    if let Some(rest) = keyword(text, "for") {
        out.push(parse_for(lines, pos, rest)?);
        return Ok(());
    }
    if keyword(text, "elif").is_some() {
        return Err(ParseError::DanglingClause { keyword: "elif", line: line.number });
    }
    if keyword(text, "else").is_some() {
        return Err(ParseError::DanglingClause { keyword: "else", line: line.number });
    }
    let opaque = OPAQUE_COMPOUNDS.iter().any(|kw| keyword(text, kw).is_some())
        // `match` is a soft keyword: only a block header form counts.
        && !(keyword(text, "match").is_some()
            && (!text.ends_with(':') || try_parse_assign(text).is_some()));
    if opaque {
        skip_opaque_compound(lines, pos);
        out.push(Stmt::Other);
        return Ok(());
    }

    for piece in split_top_level(text, ';') {
        let piece = piece.trim();
        if !piece.is_empty() {
            out.push(parse_simple_stmt(piece));
        }
    }
    *pos += 1;
    Ok(())
}

/// `def name(params) [-> type]:` plus inline or indented body.
fn parse_function_def(lines: &[Line], pos: &mut usize, rest: &str) -> Result<Stmt, ParseError> {
    let line = &lines[*pos];
    let (name, after_name) = split_leading_name(rest);
    if !is_identifier(name) {
        return Err(ParseError::InvalidHeader { kind: "def", line: line.number });
    }

    let after_name = after_name.trim_start();
    if !after_name.starts_with('(') {
        return Err(ParseError::InvalidHeader { kind: "def", line: line.number });
    }
    let (params_text, after_params) = split_parenthesized(after_name)
        .ok_or(ParseError::InvalidHeader { kind: "def", line: line.number })?;
    let params = parse_params(params_text);

    let after = after_params.trim_start();
    let colon = find_top_level(after, ':')
        .ok_or(ParseError::MissingColon { kind: "def", line: line.number })?;
    let inline = after[colon + 1..].trim();

    let header_indent = line.indent;
    let header_line = line.number;
    let body = parse_body(lines, pos, inline, header_indent, header_line)?;
    Ok(Stmt::FunctionDef(FunctionDef { name: name.to_owned(), params, body }))
}

/// `class Name[(bases)]:` plus inline or indented body.
fn parse_class_def(lines: &[Line], pos: &mut usize, rest: &str) -> Result<Stmt, ParseError> {
    let line = &lines[*pos];
    let (name, after_name) = split_leading_name(rest);
    if !is_identifier(name) {
        return Err(ParseError::InvalidHeader { kind: "class", line: line.number });
    }

    let mut after = after_name.trim_start();
    if after.starts_with('(') {
        let (_, after_bases) = split_parenthesized(after)
            .ok_or(ParseError::InvalidHeader { kind: "class", line: line.number })?;
        after = after_bases.trim_start();
    }
    let colon = find_top_level(after, ':')
        .ok_or(ParseError::MissingColon { kind: "class", line: line.number })?;
    let inline = after[colon + 1..].trim();

    let header_indent = line.indent;
    let header_line = line.number;
    let body = parse_body(lines, pos, inline, header_indent, header_line)?;
    Ok(Stmt::ClassDef(ClassDef { name: name.to_owned(), body }))
}

/// `if test:` with any `elif`/`else` continuation at the same indent. An
/// `elif` parses as a nested `If` in `orelse`, mirroring Python's own tree.
fn parse_if(lines: &[Line], pos: &mut usize, rest: &str) -> Result<Stmt, ParseError> {
    let line = &lines[*pos];
    let indent = line.indent;
    let number = line.number;

    let colon =
        find_top_level(rest, ':').ok_or(ParseError::MissingColon { kind: "if", line: number })?;
    let test = rest[..colon].trim();
    if test.is_empty() {
        return Err(ParseError::InvalidHeader { kind: "if", line: number });
    }
    let inline = rest[colon + 1..].trim();
    let body = parse_body(lines, pos, inline, indent, number)?;

    let mut orelse = Vec::new();
    if let Some(next) = lines.get(*pos) {
        if next.indent == indent {
            if let Some(elif_rest) = keyword(&next.text, "elif") {
                let elif_rest = elif_rest.to_owned();
                orelse.push(parse_if(lines, pos, &elif_rest)?);
            } else if let Some(else_rest) = keyword(&next.text, "else") {
                orelse = parse_else_suite(lines, pos, else_rest, indent)?;
            }
        }
    }

    Ok(Stmt::If(If { test: test.to_owned(), body, orelse }))
}

/// `while test:`; a trailing `else:` clause is consumed and dropped.
fn parse_while(lines: &[Line], pos: &mut usize, rest: &str) -> Result<Stmt, ParseError> {
    let line = &lines[*pos];
    let indent = line.indent;
    let number = line.number;

    let colon = find_top_level(rest, ':')
        .ok_or(ParseError::MissingColon { kind: "while", line: number })?;
    let test = rest[..colon].trim();
    if test.is_empty() {
        return Err(ParseError::InvalidHeader { kind: "while", line: number });
    }
    let inline = rest[colon + 1..].trim();
    let body = parse_body(lines, pos, inline, indent, number)?;
    discard_loop_else(lines, pos, indent)?;

    Ok(Stmt::While(While { test: test.to_owned(), body }))
}

/// `for target in iter:`; a trailing `else:` clause is consumed and dropped.
fn parse_for(lines: &[Line], pos: &mut usize, rest: &str) -> Result<Stmt, ParseError> {
    let line = &lines[*pos];
    let indent = line.indent;
    let number = line.number;

    let colon =
        find_top_level(rest, ':').ok_or(ParseError::MissingColon { kind: "for", line: number })?;
    let header = &rest[..colon];
    let in_pos =
        find_in_keyword(header).ok_or(ParseError::InvalidHeader { kind: "for", line: number })?;
    let target = header[..in_pos].trim();
    let iter = header[in_pos + 3..].trim();
    if target.is_empty() || iter.is_empty() {
        return Err(ParseError::InvalidHeader { kind: "for", line: number });
    }
    let inline = rest[colon + 1..].trim();
    let body = parse_body(lines, pos, inline, indent, number)?;
    discard_loop_else(lines, pos, indent)?;

    Ok(Stmt::For(For { target: target.to_owned(), iter: iter.to_owned(), body }))
}

/// Consume `else:` after a loop header if present. No builder inspects
/// loop-else suites, so the parsed statements are dropped.
fn discard_loop_else(lines: &[Line], pos: &mut usize, indent: usize) -> Result<(), ParseError> {
    if let Some(next) = lines.get(*pos) {
        if next.indent == indent {
            if let Some(rest) = keyword(&next.text, "else") {
                parse_else_suite(lines, pos, rest, indent)?;
            }
        }
    }
    Ok(())
}

/// Parse the suite of an `else:` clause whose header is at `pos`.
fn parse_else_suite(
    lines: &[Line],
    pos: &mut usize,
    rest: &str,
    indent: usize,
) -> Result<Vec<Stmt>, ParseError> {
    let number = lines[*pos].number;
    let Some(after_colon) = rest.strip_prefix(':') else {
        return Err(ParseError::MissingColon { kind: "else", line: number });
    };
    let inline = after_colon.trim();
    parse_body(lines, pos, inline, indent, number)
}

/// Parse a compound statement's suite: either the inline remainder of the
/// header line, or the indented block that follows. Advances past the header.
fn parse_body(
    lines: &[Line],
    pos: &mut usize,
    inline: &str,
    header_indent: usize,
    header_line: usize,
) -> Result<Vec<Stmt>, ParseError> {
    *pos += 1;
    if !inline.is_empty() {
        let stmts = split_top_level(inline, ';')
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_simple_stmt)
            .collect();
        return Ok(stmts);
    }
    match lines.get(*pos) {
        Some(next) if next.indent > header_indent => parse_suite(lines, pos, next.indent),
        _ => Err(ParseError::ExpectedBlock(header_line)),
    }
}

/// Skip a compound statement the builders ignore: consume the header, every
/// deeper line, and any continuation clauses (`except`, `finally`, `else`) at
/// the same indent. Textual skip, so arbitrary content inside never errors.
fn skip_opaque_compound(lines: &[Line], pos: &mut usize) {
    let indent = lines[*pos].indent;
    *pos += 1;
    loop {
        while *pos < lines.len() && lines[*pos].indent > indent {
            *pos += 1;
        }
        let Some(next) = lines.get(*pos) else { break };
        let continues = next.indent == indent
            && ["except", "finally", "else"]
                .iter()
                .any(|kw| keyword(&next.text, kw).is_some());
        if !continues {
            break;
        }
        *pos += 1;
    }
}

/// Parse a simple (single-line, non-compound) statement.
fn parse_simple_stmt(text: &str) -> Stmt {
    if let Some(rest) = keyword(text, "return") {
        let rest = rest.trim();
        let value = if rest.is_empty() { None } else { Some(rest.to_owned()) };
        return Stmt::Return(Return { value });
    }
    if text.starts_with('@') {
        return Stmt::Other;
    }
    if SIMPLE_KEYWORDS.iter().any(|kw| keyword(text, kw).is_some()) {
        return Stmt::Other;
    }
    if let Some(assign) = try_parse_assign(text) {
        return Stmt::Assign(assign);
    }
    Stmt::Expr(classify_expr(text))
}

// =============================================================================
// EXPRESSION TEXT
// =============================================================================

/// Detect a plain assignment: one or more `=` at bracket depth zero that are
/// not comparison, augmented, walrus or annotated forms. Returns the chained
/// targets and the value text.
fn try_parse_assign(text: &str) -> Option<Assign> {
    let chars = code_chars(text);
    let mut splits = Vec::new();
    let mut colon_seen = false;

    for (i, &(at, c, depth)) in chars.iter().enumerate() {
        if depth != 0 {
            continue;
        }
        match c {
            ':' => colon_seen = true,
            '=' => {
                let prev = i.checked_sub(1).map(|j| chars[j].1);
                let next = chars.get(i + 1).map(|e| e.1);
                let comparison = matches!(next, Some('='))
                    || matches!(
                        prev,
                        Some(
                            '=' | '!'
                                | '<'
                                | '>'
                                | '+'
                                | '-'
                                | '*'
                                | '/'
                                | '%'
                                | '&'
                                | '|'
                                | '^'
                                | '@'
                                | ':'
                                | '~'
                        )
                    );
                if comparison {
                    continue;
                }
                if colon_seen {
                    // Annotated assignment (`x: int = 1`) is not a plain assign.
                    return None;
                }
                splits.push(at);
            }
            _ => {}
        }
    }

    if splits.is_empty() {
        return None;
    }

    let mut targets = Vec::new();
    let mut start = 0;
    for &at in &splits {
        let target = text[start..at].trim();
        if target.is_empty() {
            return None;
        }
        targets.push(target.to_owned());
        start = at + 1;
    }
    let value = text[start..].trim();
    if value.is_empty() {
        return None;
    }
    Some(Assign { targets, value: value.to_owned() })
}

/// Classify an expression statement: a call if the text is `<target>(...)`
/// with the closing parenthesis last, anything else stays raw.
fn classify_expr(text: &str) -> Expr {
    if let Some(func) = call_target(text) {
        return Expr::Call(Call { func: func.to_owned(), text: text.to_owned() });
    }
    Expr::Raw(text.to_owned())
}

/// If `text` is a single call expression, return the callee text before the
/// final argument list.
fn call_target(text: &str) -> Option<&str> {
    if !text.ends_with(')') {
        return None;
    }
    let chars = code_chars(text);
    let (last_at, last_char, _) = *chars.last()?;
    if last_char != ')' || last_at + 1 != text.len() {
        return None;
    }

    // Find the '(' matching the final ')': the last depth-zero open paren.
    let open = chars
        .iter()
        .rev()
        .find(|&&(_, c, depth)| c == '(' && depth == 0)
        .map(|&(at, _, _)| at)?;
    let func = text[..open].trim_end();
    if func.is_empty() || !is_call_target(func) {
        return None;
    }
    Some(func)
}

/// A callable target reads as dotted names with optional balanced call or
/// subscript groups: `name`, `a.b`, `f(x).g`, `table[0].load`. Operators or
/// whitespace at depth zero disqualify it.
fn is_call_target(text: &str) -> bool {
    for (_, c, depth) in code_chars(text) {
        if depth > 0 {
            continue;
        }
        let ok = c.is_ascii_alphanumeric()
            || matches!(c, '_' | '.' | '(' | ')' | '[' | ']');
        if !ok {
            return false;
        }
    }
    true
}

// =============================================================================
// TEXT HELPERS
// =============================================================================

/// Match a leading keyword followed by a non-identifier character; returns
/// the remainder with leading whitespace trimmed.
fn keyword<'a>(text: &'a str, kw: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(kw)?;
    match rest.chars().next() {
        None => Some(""),
        Some(c) if !c.is_ascii_alphanumeric() && c != '_' => Some(rest.trim_start()),
        Some(_) => None,
    }
}

/// Split a leading identifier off `text`, returning `(name, rest)`.
fn split_leading_name(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(text.len());
    text.split_at(end)
}

/// Characters outside string literals, each with its byte index and the
/// bracket depth at that character (brackets report the outer depth, so a
/// matching pair shares its depth value).
fn code_chars(text: &str) -> Vec<(usize, char, i32)> {
    let mut out = Vec::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '(' | '[' | '{' => {
                out.push((i, c, depth));
                depth += 1;
            }
            ')' | ']' | '}' => {
                depth -= 1;
                out.push((i, c, depth));
            }
            _ => out.push((i, c, depth)),
        }
    }
    out
}

/// First occurrence of `target` at bracket depth zero, outside strings.
fn find_top_level(text: &str, target: char) -> Option<usize> {
    code_chars(text)
        .into_iter()
        .find(|&(_, c, depth)| c == target && depth == 0)
        .map(|(at, _, _)| at)
}

/// Split on `sep` at bracket depth zero, outside strings.
fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (at, c, depth) in code_chars(text) {
        if c == sep && depth == 0 {
            parts.push(&text[start..at]);
            start = at + c.len_utf8();
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Position of the ` in ` keyword of a `for` header, at bracket depth zero.
fn find_in_keyword(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    code_chars(text)
        .into_iter()
        .find(|&(at, c, depth)| {
            c == ' '
                && depth == 0
                && bytes[at..].starts_with(b" in")
                && bytes
                    .get(at + 3)
                    .is_some_and(|b| !b.is_ascii_alphanumeric() && *b != b'_')
        })
        .map(|(at, _, _)| at)
}

/// For text starting with `(`, return the content up to the matching `)` and
/// the remainder after it.
fn split_parenthesized(text: &str) -> Option<(&str, &str)> {
    debug_assert!(text.starts_with('('));
    let close = code_chars(text)
        .into_iter()
        .find(|&(at, c, depth)| c == ')' && depth == 0 && at > 0)
        .map(|(at, _, _)| at)?;
    Some((&text[1..close], &text[close + 1..]))
}

/// Parameter names from a `def` parameter list: annotations and defaults are
/// cut, `*args`/`**kwargs` keep their bare names, the `*` and `/` markers are
/// dropped.
fn parse_params(text: &str) -> Vec<String> {
    let mut params = Vec::new();
    for piece in split_top_level(text, ',') {
        let piece = piece.trim().trim_start_matches('*').trim_start();
        let (name, _) = split_leading_name(piece);
        if !name.is_empty() {
            params.push(name.to_owned());
        }
    }
    params
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
