use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::function::functionpoint::FunctionPoint;
use crate::io::codecerror::CodecError;
use crate::tabulated::storagekind::StorageKind;
use crate::tabulated::tabulatedfunction::TabulatedFunction;

#[derive(Serialize, Deserialize)]
struct TabulatedFunctionJsonProp {
    points: Vec<FunctionPoint>,
}

/// `{"points":[{"x":..,"y":..},...]}`
pub fn write_json<T, W>(function: &T, mut out: W) -> Result<(), CodecError>
where
    T: TabulatedFunction + ?Sized,
    W: Write,
{
    let json_prop = TabulatedFunctionJsonProp {
        points: function.points(),
    };
    serde_json::to_writer(&mut out, &json_prop)?;
    out.flush()?;
    debug!(count = json_prop.points.len(), "table written as json");
    Ok(())
}

pub fn read_json<R: Read>(
    input: R,
    storage: StorageKind,
) -> Result<Box<dyn TabulatedFunction>, CodecError> {
    let json_prop: TabulatedFunctionJsonProp = serde_json::from_reader(input)?;
    debug!(count = json_prop.points.len(), "table read from json");
    Ok(storage.build(json_prop.points)?)
}
