use std::path::Path;

use bitbrains_calldata_core::{
    encode_utf8_to_hex, mime_for_path, ByteCeiling, CalldataError, DataUri, HexCalldata,
};
use tracing::{debug, info, warn};

fn read_error(path: &Path, source: std::io::Error) -> CalldataError {
    CalldataError::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads a file into a `data:` URI.
///
/// The size gate runs on the file's metadata before any content is read, so an
/// oversized file is refused without loading it.
pub async fn file_to_data_uri(path: &Path, ceiling: ByteCeiling) -> Result<DataUri, CalldataError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| read_error(path, e))?;
    if let Err(e) = ceiling.check(metadata.len()).into_result() {
        warn!("Refusing {}: {}", path.display(), e);
        return Err(e);
    }

    let bytes = tokio::fs::read(path).await.map_err(|e| read_error(path, e))?;
    // The file may have grown between the metadata call and the read.
    ceiling.check(bytes.len() as u64).into_result()?;

    let mime = mime_for_path(path);
    info!("Read {} bytes from {} as {}", bytes.len(), path.display(), mime);
    Ok(DataUri::from_bytes(mime, bytes))
}

/// Reads a file and encodes its data URI as calldata.
pub async fn file_to_calldata(path: &Path, ceiling: ByteCeiling) -> Result<HexCalldata, CalldataError> {
    let uri = file_to_data_uri(path, ceiling).await?;
    let calldata = encode_utf8_to_hex(&uri.to_string());
    debug!("Encoded {} into {} calldata bytes", path.display(), calldata.byte_len());
    Ok(calldata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file_with(len: usize, suffix: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(&vec![0xab; len]).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_small_file_round_trips() {
        let file = temp_file_with(100, ".png");
        let uri = file_to_data_uri(file.path(), ByteCeiling::default()).await.unwrap();
        assert_eq!(uri.mime, "image/png");
        assert_eq!(uri.decoded_len(), 100);

        let reparsed = DataUri::parse(&uri.to_string()).unwrap();
        assert_eq!(reparsed.decoded_len(), 100);
    }

    #[tokio::test]
    async fn test_oversize_file_is_rejected() {
        let file = temp_file_with(200_000, ".bin");
        let err = file_to_data_uri(file.path(), ByteCeiling::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CalldataError::Oversize {
                actual: 200_000,
                allowed: 131072
            }
        ));
    }

    #[tokio::test]
    async fn test_size_gate_runs_before_read() {
        // A directory has a non-zero metadata length but cannot be read as a
        // file, so only the metadata gate can yield Oversize here.
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("brain-entry-with-a-long-name.png"), b"x").unwrap();
        let err = file_to_data_uri(dir.path(), ByteCeiling::new(0))
            .await
            .unwrap_err();
        assert!(
            matches!(err, CalldataError::Oversize { allowed: 0, .. }),
            "expected Oversize, got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.png");
        let err = file_to_data_uri(&missing, ByteCeiling::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CalldataError::Read { .. }));
    }

    #[tokio::test]
    async fn test_file_calldata_is_hex_of_data_uri() {
        let file = temp_file_with(3, ".txt");
        let calldata = file_to_calldata(file.path(), ByteCeiling::default()).await.unwrap();
        let text = bitbrains_calldata_core::decode_hex_to_utf8(calldata.as_str()).unwrap();
        assert_eq!(text, "data:text/plain;base64,q6ur");
    }
}
