use std::path::Path;

use crate::bench::BenchError;

/// Loads a 1-D or 2-D `.npy` array as one flat buffer, rows concatenated.
pub fn load_npy_buffer<T>(path: impl AsRef<Path>) -> Result<Vec<T>, BenchError>
where
    T: npyz::Deserialize,
{
    let bytes = std::fs::read(path.as_ref())?;
    let npy = npyz::NpyFile::new(&bytes[..])?;

    let shape = npy.shape().to_vec();
    if shape.is_empty() || shape.len() > 2 {
        return Err(BenchError::Npy(format!(
            "expected a 1-D or 2-D array, got shape {shape:?}"
        )));
    }
    let len: u64 = shape.iter().product();
    tracing::debug!(path = %path.as_ref().display(), ?shape, "loading .npy buffer");

    let data = npy
        .data::<T>()
        .map_err(|e| BenchError::Npy(e.to_string()))?;
    let mut result = Vec::with_capacity(len as usize);
    for entry in data {
        result.push(entry?);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use npyz::WriterBuilder;

    fn write_npy<T: npyz::Serialize + npyz::AutoSerialize + Copy>(
        name: &str,
        shape: &[u64],
        data: &[T],
    ) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("lanewise-{}-{name}.npy", std::process::id()));
        let mut out = Vec::new();
        {
            let mut writer = npyz::WriteOptions::new()
                .default_dtype()
                .shape(shape)
                .writer(&mut out)
                .begin_nd()
                .unwrap();
            writer.extend(data.iter().copied()).unwrap();
            writer.finish().unwrap();
        }
        std::fs::write(&path, out).unwrap();
        path
    }

    #[test]
    fn test_load_1d_buffer() {
        let path = write_npy("1d", &[4], &[1.0f32, 2.0, 3.0, 4.0]);
        let buffer: Vec<f32> = load_npy_buffer(&path).unwrap();
        assert_eq!(buffer, vec![1.0, 2.0, 3.0, 4.0]);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_2d_buffer_flattens_rows() {
        let path = write_npy("2d", &[2, 3], &[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let buffer: Vec<f64> = load_npy_buffer(&path).unwrap();
        assert_eq!(buffer, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_rejects_wrong_dtype() {
        let path = write_npy("dtype", &[2], &[1i64, 2]);
        let result = load_npy_buffer::<f32>(&path);
        assert!(matches!(result, Err(BenchError::Npy(_))));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_npy_buffer::<f32>("/nonexistent/lanewise.npy");
        assert!(matches!(result, Err(BenchError::Io(_))));
    }
}
