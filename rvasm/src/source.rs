use crate::data;
use crate::error::AsmError;

/// One instruction statement: the mnemonic, its argument strings kept
/// verbatim for the decoder, and the 1-based source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    pub mnemonic: String,
    pub args: Vec<String>,
    pub line: usize,
}

/// The raw parse result: instruction statements, data bytes, and the
/// per-position label lists of both sections.
///
/// After parsing, `code_labels` has (at least) one entry per statement
/// and `data_labels` one entry per data byte; labels declared past the
/// end of a section keep the lists one entry longer.
#[derive(Debug, Default)]
pub struct Listing {
    pub code: Vec<Statement>,
    pub code_labels: Vec<Vec<String>>,
    pub data: Vec<u8>,
    pub data_labels: Vec<Vec<String>>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Text,
    Data,
}

/// Strips the trailing `//` comment and surrounding whitespace.
///
/// Comment scanning is string-aware so `.string "..."` bodies may contain
/// `//`. Inside a string a backslash consumes the following character, so
/// `\"` never toggles string state.
pub(crate) fn trim_line(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if in_string => i += 1,
            b'"' => in_string = !in_string,
            b'/' if !in_string && bytes.get(i + 1) == Some(&b'/') => {
                return line[..i].trim();
            }
            _ => {}
        }
        i += 1;
    }

    line.trim()
}

pub(crate) fn parse(input: &str) -> Result<Listing, AsmError> {
    let mut listing = Listing::default();
    let mut section = Section::None;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let mut line = trim_line(raw);

        if line.is_empty() {
            continue;
        }

        match line {
            ".text" => {
                section = Section::Text;
                continue;
            }
            ".data" => {
                section = Section::Data;
                continue;
            }
            _ => {}
        }

        loop {
            let (kword, rest) = split_statement(line);

            // A label may stand alone or prefix a statement on the same
            // line (`msg: .string "Hi"`).
            if let Some(name) = kword.strip_suffix(':') {
                if !is_valid_label(name) {
                    return Err(AsmError::BadLabelName {
                        line: line_no,
                        name: name.to_owned(),
                    });
                }

                let (labels, position) = match section {
                    Section::Data => (&mut listing.data_labels, listing.data.len()),
                    _ => (&mut listing.code_labels, listing.code.len()),
                };
                declare_label(labels, position, name.to_owned());

                if rest.is_empty() {
                    break;
                }
                line = rest;
                continue;
            }

            if kword.starts_with('.') {
                if section != Section::Data {
                    return Err(AsmError::DataOutsideSection {
                        line: line_no,
                        directive: kword.to_owned(),
                    });
                }

                match kword {
                    ".word" => data::append_ints(&mut listing.data, rest, 4, ".word", line_no)?,
                    ".half" => data::append_ints(&mut listing.data, rest, 2, ".half", line_no)?,
                    ".byte" => data::append_ints(&mut listing.data, rest, 1, ".byte", line_no)?,
                    ".zero" => data::append_zeroes(&mut listing.data, rest, line_no)?,
                    ".string" => data::append_string(&mut listing.data, rest, line_no)?,
                    ".align" => data::align(&mut listing.data, rest, line_no)?,
                    _ => {
                        return Err(AsmError::UnknownDirective {
                            line: line_no,
                            directive: kword.to_owned(),
                        })
                    }
                }
                break;
            }

            if section != Section::Text {
                return Err(AsmError::CodeOutsideSection {
                    line: line_no,
                    mnemonic: kword.to_owned(),
                });
            }

            listing.code.push(Statement {
                mnemonic: kword.to_owned(),
                args: split_args(rest),
                line: line_no,
            });
            break;
        }
    }

    pad_to_fit(&mut listing.code_labels, listing.code.len());
    pad_to_fit(&mut listing.data_labels, listing.data.len());

    Ok(listing)
}

fn split_statement(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((kword, rest)) => (kword, rest.trim()),
        None => (line, ""),
    }
}

fn split_args(rest: &str) -> Vec<String> {
    rest.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_owned)
        .collect()
}

/// A label is an identifier or pure digits (a positional label).
fn is_valid_label(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if name.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    let first = name.as_bytes()[0];
    (first.is_ascii_alphabetic() || first == b'_')
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn declare_label(labels: &mut Vec<Vec<String>>, position: usize, name: String) {
    if labels.len() <= position {
        labels.resize_with(position + 1, Vec::new);
    }
    labels[position].push(name);
}

fn pad_to_fit(labels: &mut Vec<Vec<String>>, len: usize) {
    if labels.len() < len {
        labels.resize_with(len, Vec::new);
    }
}
