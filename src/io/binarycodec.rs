use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use tracing::debug;

use crate::function::functionpoint::FunctionPoint;
use crate::io::codecerror::CodecError;
use crate::tabulated::storagekind::StorageKind;
use crate::tabulated::tabulatedfunction::TabulatedFunction;

/// Big-endian `i32` point count, then `f64` x and `f64` y for every point.
pub fn write_binary<T, W>(function: &T, mut out: W) -> Result<(), CodecError>
where
    T: TabulatedFunction + ?Sized,
    W: Write,
{
    let points = function.points();
    let count = i32::try_from(points.len()).map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "too many points for an i32 count")
    })?;
    out.write_i32::<BigEndian>(count)?;
    for point in &points {
        out.write_f64::<BigEndian>(point.x())?;
        out.write_f64::<BigEndian>(point.y())?;
    }
    out.flush()?;
    debug!(count, "table written as binary");
    Ok(())
}

/// Reads a table written by [`write_binary`] into the selected storage.
pub fn read_binary<R: Read>(
    mut input: R,
    storage: StorageKind,
) -> Result<Box<dyn TabulatedFunction>, CodecError> {
    let count = input.read_i32::<BigEndian>()?;
    let count = usize::try_from(count).map_err(|_| CodecError::NegativeCount(count.into()))?;
    let mut points = Vec::new();
    for _ in 0..count {
        let x = input.read_f64::<BigEndian>()?;
        let y = input.read_f64::<BigEndian>()?;
        points.push(FunctionPoint::new(x, y));
    }
    debug!(count, "table read from binary");
    Ok(storage.build(points)?)
}
