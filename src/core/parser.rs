use crate::domain::model::DirectoryRecord;
use crate::utils::error::{CheckError, Result};
use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Error as XmlError, Reader};

const USER_ELEMENT: &str = "user";
const MAX_DIAGNOSTICS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Number,
    Status,
    Name,
}

impl Field {
    fn from_element(name: &str) -> Option<Self> {
        match name {
            "address1_telephone1" => Some(Field::Number),
            "tisa_useraccessibilitycode" => Some(Field::Status),
            "fullname" => Some(Field::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct UserBuilder {
    number: Option<String>,
    status: Option<String>,
    name: Option<String>,
    open_field: Option<(Field, String)>,
}

impl UserBuilder {
    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Number => &mut self.number,
            Field::Status => &mut self.status,
            Field::Name => &mut self.name,
        }
    }

    // First occurrence of a field wins.
    fn open(&mut self, field: Field) {
        if self.slot(field).is_none() {
            self.open_field = Some((field, String::new()));
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some((_, buffer)) = &mut self.open_field {
            buffer.push_str(text);
        }
    }

    fn close_field(&mut self) {
        if let Some((field, buffer)) = self.open_field.take() {
            let slot = self.slot(field);
            if slot.is_none() {
                *slot = Some(buffer.trim().to_string());
            }
        }
    }

    fn build(mut self) -> DirectoryRecord {
        self.close_field();
        DirectoryRecord {
            number: self.number.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        }
    }
}

/// Tracks element nesting and collects records plus every well-formedness
/// problem seen along the way.
///
/// Depth 1 is the root, depth 2 a `user`, depth 3 one of its fields.
#[derive(Debug, Default)]
struct DocumentWalker {
    stack: Vec<String>,
    seen_root: bool,
    user: Option<UserBuilder>,
    records: Vec<DirectoryRecord>,
    diagnostics: Vec<String>,
}

impl DocumentWalker {
    fn diagnose(&mut self, message: String) {
        tracing::debug!("XML diagnostic: {}", message);
        self.diagnostics.push(message);
    }

    /// Returns false when the name is rejected and the element is not tracked.
    fn open(&mut self, name: String, position: u64) -> bool {
        if !self.check_name(&name, position) {
            return false;
        }

        match self.stack.len() {
            0 => {
                if self.seen_root {
                    self.diagnose(format!(
                        "extra content after the root element: <{}> at byte {}",
                        name, position
                    ));
                }
                self.seen_root = true;
            }
            1 if name == USER_ELEMENT => self.user = Some(UserBuilder::default()),
            2 => {
                if let (Some(user), Some(field)) = (&mut self.user, Field::from_element(&name)) {
                    user.open(field);
                }
            }
            _ => {}
        }
        self.stack.push(name);
        true
    }

    fn close(&mut self, name: String, position: u64) {
        if !self.check_name(&name, position) {
            return;
        }

        match self.stack.iter().rposition(|open| *open == name) {
            None => self.diagnose(format!(
                "unexpected end tag </{}> at byte {}",
                name, position
            )),
            Some(index) => {
                if index + 1 != self.stack.len() {
                    let expected = self.stack[self.stack.len() - 1].clone();
                    self.diagnose(format!(
                        "mismatched end tag: expected </{}>, found </{}> at byte {}",
                        expected, name, position
                    ));
                }
                self.truncate(index);
            }
        }
    }

    fn empty(&mut self, name: String, position: u64) {
        if self.open(name, position) {
            self.truncate(self.stack.len() - 1);
        }
    }

    fn check_name(&mut self, name: &str, position: u64) -> bool {
        if is_xml_name(name) {
            return true;
        }
        if name.is_empty() {
            self.diagnose(format!("invalid or empty element name at byte {}", position));
        } else {
            self.diagnose(format!(
                "invalid element name `{}` at byte {}",
                name, position
            ));
        }
        false
    }

    fn check_attributes(&mut self, tag: &BytesStart<'_>, position: u64) {
        let tag_name = element_name(tag.name().as_ref());
        for attribute in tag.attributes().with_checks(true) {
            match attribute {
                Ok(attribute) => {
                    let key = element_name(attribute.key.as_ref());
                    if !is_xml_name(&key) {
                        self.diagnose(format!(
                            "invalid attribute name `{}` in <{}> at byte {}",
                            key, tag_name, position
                        ));
                    }
                    if let Err(err) = attribute.unescape_value() {
                        let (message, _) = describe_error(&err);
                        self.diagnose(format!(
                            "{} in attribute `{}` of <{}> at byte {}",
                            message, key, tag_name, position
                        ));
                    }
                }
                Err(err) => self.diagnose(format!(
                    "{} in <{}> at byte {}",
                    describe_attr_error(&err),
                    tag_name,
                    position
                )),
            }
        }
    }

    fn truncate(&mut self, depth: usize) {
        while self.stack.len() > depth {
            let closing_depth = self.stack.len();
            self.stack.pop();
            match closing_depth {
                3 => {
                    if let Some(user) = &mut self.user {
                        user.close_field();
                    }
                }
                2 => {
                    if let Some(user) = self.user.take() {
                        self.records.push(user.build());
                    }
                }
                _ => {}
            }
        }
    }

    fn text(&mut self, text: &str, position: u64) {
        match self.stack.len() {
            0 if !text.trim().is_empty() => self.diagnose(format!(
                "text outside the root element at byte {}",
                position
            )),
            3 => {
                if let Some(user) = &mut self.user {
                    user.push_text(text);
                }
            }
            _ => {}
        }
    }

    fn finish(mut self, position: u64) -> Result<Vec<DirectoryRecord>> {
        for name in self.stack.clone().iter().rev() {
            self.diagnose(format!(
                "element <{}> not closed at end of input (byte {})",
                name, position
            ));
        }
        if !self.seen_root {
            self.diagnose("document has no root element".to_string());
        }

        if self.diagnostics.is_empty() {
            Ok(self.records)
        } else {
            Err(CheckError::ParseError {
                diagnostics: self.diagnostics,
            })
        }
    }
}

fn element_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == ':'
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => chars.all(|c| {
            is_name_start(c) || c.is_numeric() || matches!(c, '-' | '.' | '\u{B7}')
        }),
        _ => false,
    }
}

/// Message plus the offset of the problem relative to the unescaped input.
fn describe_error(err: &XmlError) -> (String, Option<usize>) {
    match err {
        XmlError::Escape(EscapeError::UnrecognizedEntity(range, entity)) => {
            (format!("unrecognized entity `{}`", entity), Some(range.start))
        }
        XmlError::Escape(EscapeError::UnterminatedEntity(range)) => {
            ("unterminated entity reference".to_string(), Some(range.start))
        }
        other => (other.to_string(), None),
    }
}

fn describe_attr_error(err: &AttrError) -> &'static str {
    match err {
        AttrError::ExpectedEq(_) => "attribute without `=`",
        AttrError::ExpectedValue(_) => "attribute without a value",
        AttrError::UnquotedValue(_) => "unquoted attribute value",
        AttrError::ExpectedQuote(_, _) => "unterminated attribute value",
        AttrError::Duplicated(_, _) => "duplicate attribute",
    }
}

/// Parses the directory document into one record per `user` child of the
/// root element. Missing fields become empty strings.
///
/// Any well-formedness problem fails the whole document, and the error
/// carries every diagnostic found rather than just the first. Positions in
/// diagnostics are the byte offset where the offending construct starts.
pub fn parse_directory(body: &str) -> Result<Vec<DirectoryRecord>> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().check_end_names = false;
    reader.config_mut().allow_unmatched_ends = true;
    reader.config_mut().check_comments = true;

    let mut walker = DocumentWalker::default();
    let mut last_error_at = None;

    loop {
        let start = reader.buffer_position() as u64;
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                walker.check_attributes(&e, start);
                walker.open(element_name(e.name().as_ref()), start);
            }
            Ok(Event::Empty(e)) => {
                walker.check_attributes(&e, start);
                walker.empty(element_name(e.name().as_ref()), start);
            }
            Ok(Event::End(e)) => walker.close(element_name(e.name().as_ref()), start),
            Ok(Event::Text(e)) => match e.unescape() {
                Ok(text) => walker.text(&text, start),
                Err(err) => {
                    let (message, offset) = describe_error(&err);
                    let at = start + offset.unwrap_or(0) as u64;
                    walker.diagnose(format!("{} at byte {}", message, at));
                }
            },
            Ok(Event::CData(e)) => walker.text(&String::from_utf8_lossy(&e), start),
            Ok(Event::Decl(_)) if start != 0 => walker.diagnose(format!(
                "XML declaration allowed only at the start of the document, found at byte {}",
                start
            )),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                let error_at = reader.error_position() as u64;
                let (message, _) = describe_error(&err);
                walker.diagnose(format!("{} at byte {}", message, error_at));
                if last_error_at == Some(error_at) {
                    break;
                }
                last_error_at = Some(error_at);
            }
        }

        if walker.diagnostics.len() >= MAX_DIAGNOSTICS {
            break;
        }
    }

    let records = walker.finish(reader.buffer_position() as u64)?;
    tracing::debug!("Parsed {} directory records", records.len());
    Ok(records)
}
