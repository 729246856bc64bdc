//! Per-line statement classification.
//!
//! Each statement is recognised by its leading keyword; the rest of the line
//! is cut at the statement's separators (outside string literals) and the
//! pieces are parsed into typed fields. A keyword followed by the wrong shape
//! is [`SyntaxError::Malformed`], never a different statement.

use child_ir::keywords::{COMMENT, END, OTHERWISE};
use child_ir::{is_valid_name, strip_keyword, Expr, Name, Stmt};

use crate::split::split_outside_quotes;
use crate::{parse_condition, parse_expr, SyntaxError, Usage};

/// Classify one source line.
pub fn classify(line: &str) -> Result<Stmt, SyntaxError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT) {
        return Ok(Stmt::Blank);
    }
    if line == END {
        return Ok(Stmt::End);
    }
    if line == OTHERWISE {
        return Ok(Stmt::Otherwise);
    }

    let cx = Line { text: line };
    if let Some(rest) = strip_keyword(line, "say") {
        return cx.say(rest);
    }
    if let Some(rest) = strip_keyword(line, "remember") {
        return cx.remember(rest);
    }
    if let Some(rest) = strip_keyword(line, "list") {
        return cx.make_list(rest);
    }
    if let Some(rest) = strip_keyword(line, "add") {
        return cx.append(rest);
    }
    if let Some(rest) = strip_keyword(line, "get") {
        return cx.get_item(rest);
    }
    if let Some(rest) = strip_keyword(line, "size") {
        return cx.size_of(rest);
    }
    if let Some(rest) = strip_keyword(line, "ask") {
        return cx.ask(rest);
    }
    if let Some(rest) = strip_keyword(line, "if") {
        return cx.if_then(rest);
    }
    if let Some(rest) = strip_keyword(line, "repeat") {
        return cx.repeat(rest);
    }
    if let Some(rest) = strip_keyword(line, "count") {
        return cx.count(rest);
    }
    if let Some(rest) = strip_keyword(line, "for") {
        return cx.for_each(rest);
    }
    if let Some(rest) = strip_keyword(line, "learn") {
        return cx.learn(rest);
    }
    if let Some(rest) = strip_keyword(line, "do") {
        return cx.call(rest);
    }

    Err(SyntaxError::UnknownCommand {
        text: line.to_string(),
    })
}

/// Classification context for one trimmed line.
struct Line<'a> {
    text: &'a str,
}

impl<'a> Line<'a> {
    fn malformed(&self, usage: Usage) -> SyntaxError {
        SyntaxError::Malformed {
            usage,
            text: self.text.to_string(),
        }
    }

    /// Cut `text` at `sep` into exactly two non-empty halves.
    fn pair(
        &self,
        text: &'a str,
        sep: &str,
        usage: Usage,
    ) -> Result<(&'a str, &'a str), SyntaxError> {
        match split_outside_quotes(text, sep).as_slice() {
            &[left, right] if !left.trim().is_empty() && !right.trim().is_empty() => {
                Ok((left.trim(), right.trim()))
            }
            _ => Err(self.malformed(usage)),
        }
    }

    /// Nested keyword such as `item` after `get`.
    fn sub_keyword(&self, rest: &'a str, kw: &str, usage: Usage) -> Result<&'a str, SyntaxError> {
        match strip_keyword(rest, kw) {
            Some(inner) if !inner.is_empty() => Ok(inner),
            _ => Err(self.malformed(usage)),
        }
    }

    fn non_empty(&self, rest: &'a str, usage: Usage) -> Result<&'a str, SyntaxError> {
        if rest.trim().is_empty() {
            Err(self.malformed(usage))
        } else {
            Ok(rest.trim())
        }
    }

    fn say(&self, rest: &str) -> Result<Stmt, SyntaxError> {
        let value = expr(self.non_empty(rest, Usage::Say)?)?;
        Ok(Stmt::Say { value })
    }

    fn remember(&self, rest: &'a str) -> Result<Stmt, SyntaxError> {
        let (value, name) = self.pair(rest, " as ", Usage::Remember)?;
        Ok(Stmt::Remember {
            value: expr(value)?,
            name: target(name)?,
        })
    }

    fn make_list(&self, rest: &'a str) -> Result<Stmt, SyntaxError> {
        let (value, name) = self.pair(rest, " as ", Usage::MakeList)?;
        Ok(Stmt::MakeList {
            value: expr(value)?,
            name: target(name)?,
        })
    }

    fn append(&self, rest: &'a str) -> Result<Stmt, SyntaxError> {
        let (value, list) = self.pair(rest, " to ", Usage::Append)?;
        Ok(Stmt::Append {
            value: expr(value)?,
            list: target(list)?,
        })
    }

    fn get_item(&self, rest: &'a str) -> Result<Stmt, SyntaxError> {
        let rest = self.sub_keyword(rest, "item", Usage::GetItem)?;
        let (index, tail) = self.pair(rest, " from ", Usage::GetItem)?;
        let (list, name) = self.pair(tail, " as ", Usage::GetItem)?;
        Ok(Stmt::GetItem {
            index: expr(index)?,
            list: target(list)?,
            name: target(name)?,
        })
    }

    fn size_of(&self, rest: &'a str) -> Result<Stmt, SyntaxError> {
        let rest = self.sub_keyword(rest, "of", Usage::SizeOf)?;
        let (list, name) = self.pair(rest, " as ", Usage::SizeOf)?;
        Ok(Stmt::SizeOf {
            list: target(list)?,
            name: target(name)?,
        })
    }

    fn ask(&self, rest: &'a str) -> Result<Stmt, SyntaxError> {
        let (prompt, name) = self.pair(rest, " and remember it as ", Usage::Ask)?;
        Ok(Stmt::Ask {
            prompt: expr(prompt)?,
            name: target(name)?,
        })
    }

    fn if_then(&self, rest: &'a str) -> Result<Stmt, SyntaxError> {
        let condition = rest
            .strip_suffix(" then")
            .ok_or_else(|| self.malformed(Usage::If))?;
        let condition = self.non_empty(condition, Usage::If)?;
        Ok(Stmt::If {
            condition: parse_condition(condition)?,
        })
    }

    fn repeat(&self, rest: &'a str) -> Result<Stmt, SyntaxError> {
        let times = rest
            .strip_suffix(" times")
            .ok_or_else(|| self.malformed(Usage::Repeat))?;
        let times = self.non_empty(times, Usage::Repeat)?;
        Ok(Stmt::Repeat { times: expr(times)? })
    }

    fn count(&self, rest: &'a str) -> Result<Stmt, SyntaxError> {
        let rest = self.sub_keyword(rest, "from", Usage::Count)?;
        let (from, tail) = self.pair(rest, " to ", Usage::Count)?;
        let (to, name) = self.pair(tail, " as ", Usage::Count)?;
        Ok(Stmt::Count {
            from: expr(from)?,
            to: expr(to)?,
            name: target(name)?,
        })
    }

    fn for_each(&self, rest: &'a str) -> Result<Stmt, SyntaxError> {
        let rest = self.sub_keyword(rest, "each", Usage::ForEach)?;
        let rest = self.sub_keyword(rest, "item", Usage::ForEach)?;
        let rest = self.sub_keyword(rest, "in", Usage::ForEach)?;
        let (list, name) = self.pair(rest, " as ", Usage::ForEach)?;
        Ok(Stmt::ForEach {
            list: target(list)?,
            name: target(name)?,
        })
    }

    fn learn(&self, rest: &'a str) -> Result<Stmt, SyntaxError> {
        let rest = self.sub_keyword(rest, "how", Usage::Learn)?;
        let signature = self.sub_keyword(rest, "to", Usage::Learn)?;
        let (name, params) = self.signature(signature, Usage::Learn)?;

        let mut names: Vec<Name> = Vec::with_capacity(params.len());
        for param in params {
            let param = target(param)?;
            if names.contains(&param) {
                return Err(SyntaxError::DuplicateParameter {
                    procedure: name.to_string(),
                    name: param,
                });
            }
            names.push(param);
        }
        Ok(Stmt::Learn {
            name: name.to_string(),
            params: names,
        })
    }

    fn call(&self, rest: &'a str) -> Result<Stmt, SyntaxError> {
        let rest = self.non_empty(rest, Usage::Do)?;
        let (name, args) = self.signature(rest, Usage::Do)?;
        let args = args
            .into_iter()
            .map(expr)
            .collect::<Result<Vec<Expr>, _>>()?;
        Ok(Stmt::Do {
            name: name.to_string(),
            args,
        })
    }

    /// `NAME [with A and B ...]`, shared by `learn` and `do`.
    fn signature(
        &self,
        text: &'a str,
        usage: Usage,
    ) -> Result<(&'a str, Vec<&'a str>), SyntaxError> {
        if text.ends_with(" with") {
            return Err(self.malformed(usage));
        }
        match split_outside_quotes(text, " with ").as_slice() {
            &[name] => Ok((self.non_empty(name, usage)?, Vec::new())),
            &[name, list] => {
                let name = self.non_empty(name, usage)?;
                let items = split_outside_quotes(list, " and ")
                    .into_iter()
                    .map(|item| self.non_empty(item, usage))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((name, items))
            }
            _ => Err(self.malformed(usage)),
        }
    }
}

fn expr(text: &str) -> Result<Expr, SyntaxError> {
    parse_expr(text).map_err(|reason| SyntaxError::Expression {
        text: text.to_string(),
        reason,
    })
}

fn target(text: &str) -> Result<Name, SyntaxError> {
    if is_valid_name(text) {
        Ok(text.to_string())
    } else {
        Err(SyntaxError::InvalidName {
            name: text.to_string(),
        })
    }
}
