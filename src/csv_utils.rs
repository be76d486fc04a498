use std::error::Error;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::curve::Signature;

/// Reads a signature from CSV data, taking abscissae and ordinates from the
/// named columns. Rows where either field is missing or not a number are skipped.
pub fn read_signature<R: Read>(
    reader: R,
    x_column: &str,
    y_column: &str,
) -> Result<Signature, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_reader(reader);

    // Read headers once and resolve both column indices
    let headers = rdr.headers()?.clone();
    let position = |column: &str| {
        headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| format!("CSV column {column:?} not found"))
    };
    let x_index = position(x_column)?;
    let y_index = position(y_column)?;

    let mut signature = Signature::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let record = result?;
        let x = record.get(x_index).and_then(|f| f.trim().parse::<f64>().ok());
        let y = record.get(y_index).and_then(|f| f.trim().parse::<f64>().ok());
        match (x, y) {
            (Some(x), Some(y)) => signature.add_datapoint(x, y),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, kept = signature.len(), "skipped CSV rows without numeric x/y");
    }
    Ok(signature)
}

/// Reads a signature from a CSV file. See [`read_signature`].
pub fn read_signature_from_path<P: AsRef<Path>>(
    path: P,
    x_column: &str,
    y_column: &str,
) -> Result<Signature, Box<dyn Error>> {
    let file = File::open(path)?;
    read_signature(file, x_column, y_column)
}

/// Writes a signature as two-column CSV with the given headers.
pub fn write_signature<W: Write>(
    writer: W,
    signature: &Signature,
    x_header: &str,
    y_header: &str,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([x_header, y_header])?;
    for point in signature {
        wtr.write_record([point.x.to_string(), point.y.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes a signature to a CSV file, replacing any existing content.
pub fn write_signature_to_path<P: AsRef<Path>>(
    path: P,
    signature: &Signature,
    x_header: &str,
    y_header: &str,
) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    write_signature(file, signature, x_header, y_header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Datapoint;

    #[test]
    fn test_read_named_columns() {
        let data = "wavelength,label,reflectance\n400,a,0.10\n410,b,0.12\n420,c,0.15\n";
        let sig = read_signature(data.as_bytes(), "wavelength", "reflectance").unwrap();
        assert_eq!(sig.xs(), vec![400.0, 410.0, 420.0]);
        assert_eq!(sig.ys(), vec![0.10, 0.12, 0.15]);
    }

    #[test]
    fn test_read_skips_invalid_rows() {
        let data = "x,y\n0,1\n1,\nfoo,2\n3,4\n";
        let sig = read_signature(data.as_bytes(), "x", "y").unwrap();
        assert_eq!(sig.points(), &[Datapoint::new(0.0, 1.0), Datapoint::new(3.0, 4.0)]);
    }

    #[test]
    fn test_read_missing_column() {
        let data = "x,y\n0,1\n";
        let err = read_signature(data.as_bytes(), "x", "z").unwrap_err();
        assert!(err.to_string().contains("\"z\""));
    }

    #[test]
    fn test_write_then_read() {
        let sig: Signature = vec![(0.5, -1.25), (1.5, 2.0)].into_iter().collect();
        let mut buffer = Vec::new();
        write_signature(&mut buffer, &sig, "x", "y").unwrap();

        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.starts_with("x,y\n"));

        let back = read_signature(buffer.as_slice(), "x", "y").unwrap();
        assert_eq!(back, sig);
    }
}
