use std::io::{BufRead, Write};

use tracing::debug;

use crate::function::functionpoint::FunctionPoint;
use crate::io::codecerror::CodecError;
use crate::tabulated::storagekind::StorageKind;
use crate::tabulated::tabulatedfunction::TabulatedFunction;

// ─────────────────────────────────────────────────────────────────────────────
// Text format
// ─────────────────────────────────────────────────────────────────────────────
//
//   <count>
//   <x0> <y0>
//   <x1> <y1>
//   ...
//
// 讀取時只依空白切分 token，不要求換行位置。

/// Writes the point count followed by one `x y` line per point.
pub fn write_text<T, W>(function: &T, mut out: W) -> Result<(), CodecError>
where
    T: TabulatedFunction + ?Sized,
    W: Write,
{
    let points = function.points();
    writeln!(out, "{}", points.len())?;
    for point in &points {
        writeln!(out, "{} {}", point.x(), point.y())?;
    }
    out.flush()?;
    debug!(count = points.len(), "table written as text");
    Ok(())
}

/// Reads a table written by [`write_text`] into the selected storage.
pub fn read_text<R: BufRead>(
    input: R,
    storage: StorageKind,
) -> Result<Box<dyn TabulatedFunction>, CodecError> {
    let mut content = String::new();
    for line in input.lines() {
        content.push_str(&line?);
        content.push('\n');
    }
    let mut tokens = Tokens {
        inner: content.split_whitespace(),
        position: 0,
    };

    let count = tokens.next_count()?;
    // the count is untrusted, grow as points actually arrive
    let mut points = Vec::new();
    for _ in 0..count {
        let x = tokens.next_f64()?;
        let y = tokens.next_f64()?;
        points.push(FunctionPoint::new(x, y));
    }
    debug!(count, "table read from text");
    Ok(storage.build(points)?)
}

struct Tokens<'a, I: Iterator<Item = &'a str>> {
    inner: I,
    position: usize,
}

impl<'a, I: Iterator<Item = &'a str>> Tokens<'a, I> {
    fn next_token(&mut self) -> Result<&'a str, CodecError> {
        self.position += 1;
        self.inner.next().ok_or_else(|| CodecError::Parse {
            position: self.position,
            message: "unexpected end of input".to_owned(),
        })
    }

    fn next_f64(&mut self) -> Result<f64, CodecError> {
        let token = self.next_token()?;
        token.parse::<f64>().map_err(|error| CodecError::Parse {
            position: self.position,
            message: format!("'{}': {}", token, error),
        })
    }

    fn next_count(&mut self) -> Result<usize, CodecError> {
        let token = self.next_token()?;
        let count = token.parse::<i64>().map_err(|error| CodecError::Parse {
            position: self.position,
            message: format!("'{}': {}", token, error),
        })?;
        usize::try_from(count).map_err(|_| CodecError::NegativeCount(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabulated::arraytabulatedfunction::ArrayTabulatedFunction;
    use crate::tabulated::tabulatedfunctionerror::{ConstructionError, TabulatedFunctionError};

    #[test]
    fn test_layout() {
        let function = ArrayTabulatedFunction::with_values(0.0, 1.0, &[2.0, -0.5]).unwrap();
        let mut buffer = Vec::new();
        write_text(&function, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "2\n0 2\n1 -0.5\n");
    }

    #[test]
    fn test_read_accepts_free_whitespace() {
        let input = "3 0 1\n\n 1.5   2\t3 4 ";
        let function = read_text(input.as_bytes(), StorageKind::LinkedList).unwrap();
        assert_eq!(function.points_count(), 3);
        assert_eq!(function.point(1).unwrap(), FunctionPoint::new(1.5, 2.0));
    }

    #[test]
    fn test_huge_count_with_short_body_is_a_parse_error() {
        assert!(matches!(
            read_text("99999999999999999 0 1".as_bytes(), StorageKind::Array),
            Err(CodecError::Parse { position: 4, .. })
        ));
    }

    #[test]
    fn test_read_errors() {
        assert!(matches!(
            read_text("2 0 1 1".as_bytes(), StorageKind::Array),
            Err(CodecError::Parse { position: 5, .. })
        ));
        assert!(matches!(
            read_text("2 0 x 1 1".as_bytes(), StorageKind::Array),
            Err(CodecError::Parse { position: 3, .. })
        ));
        assert!(matches!(
            read_text("-1".as_bytes(), StorageKind::Array),
            Err(CodecError::NegativeCount(-1))
        ));
        assert!(matches!(
            read_text("2 1 0 0 0".as_bytes(), StorageKind::Array),
            Err(CodecError::Function(TabulatedFunctionError::Construction(
                ConstructionError::UnorderedPoints { index: 0 }
            )))
        ));
    }
}
