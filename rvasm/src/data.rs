use crate::error::AsmError;
use crate::int_util::parse_int;
use byteorder::ByteOrder;
use rvcpu::Endian;

fn width_mask(width: usize) -> u64 {
    (1u64 << (8 * width as u32)) - 1
}

/// Appends a comma-separated list of integer literals, each masked to
/// `width` bytes and packed little-endian.
pub(crate) fn append_ints(
    data: &mut Vec<u8>,
    args: &str,
    width: usize,
    directive: &str,
    line: usize,
) -> Result<(), AsmError> {
    let literals: Vec<&str> = args
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if literals.is_empty() {
        return Err(AsmError::EmptyDataList {
            line,
            directive: directive.to_owned(),
        });
    }

    data.reserve(literals.len() * width);

    for literal in literals {
        let value = parse_int(literal, line)?;
        let start = data.len();
        data.resize(start + width, 0);
        Endian::write_uint(&mut data[start..], value as u64 & width_mask(width), width);
    }

    Ok(())
}

/// `.zero N`: appends N zero bytes.
pub(crate) fn append_zeroes(data: &mut Vec<u8>, args: &str, line: usize) -> Result<(), AsmError> {
    let literal = args.trim();
    let count = usize::try_from(parse_int(literal, line)?).map_err(|_| AsmError::BadIntLiteral {
        line,
        literal: literal.to_owned(),
    })?;
    data.resize(data.len() + count, 0);
    Ok(())
}

/// `.string "..."`: appends the UTF-8 bytes of the string, with C-style
/// escape processing, followed by a NUL terminator.
pub(crate) fn append_string(data: &mut Vec<u8>, args: &str, line: usize) -> Result<(), AsmError> {
    let arg = args.trim();
    let mut chars = arg.chars();

    if chars.next() != Some('"') {
        return Err(AsmError::BadStringLiteral { line });
    }

    let mut text = String::new();
    let mut closed = false;

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                closed = true;
                break;
            }
            '\\' => match chars.next() {
                Some('n') => text.push('\n'),
                Some('t') => text.push('\t'),
                Some('"') => text.push('"'),
                Some('\\') => text.push('\\'),
                Some(other) => return Err(AsmError::UnknownEscape { line, escape: other }),
                None => return Err(AsmError::BadStringLiteral { line }),
            },
            _ => text.push(c),
        }
    }

    if !closed || chars.next().is_some() {
        return Err(AsmError::BadStringLiteral { line });
    }

    data.extend_from_slice(text.as_bytes());
    data.push(0);
    Ok(())
}

/// `.align N`: appends zero bytes until the data length is a multiple of N.
pub(crate) fn align(data: &mut Vec<u8>, args: &str, line: usize) -> Result<(), AsmError> {
    let alignment = usize::try_from(parse_int(args.trim(), line)?)
        .ok()
        .filter(|a| *a > 0)
        .ok_or(AsmError::BadAlignment { line })?;

    while data.len() % alignment != 0 {
        data.push(0);
    }
    Ok(())
}
