//! `multipart/form-data` encoding of media uploads.

use std::fs;
use std::io;
use std::path::Path;

use bytes::Bytes;
use mime::Mime;

/// The form field name every uploaded file is sent under.
pub const FIELD_NAME: &str = "media[]";

/// A file to be uploaded along with a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaFile {
    pub name: String,
    pub data: Bytes,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        MediaFile {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Reads the file at `path`, naming it after the last path component.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(MediaFile::new(name, data))
    }

    pub fn content_type(&self) -> Mime {
        content_type(&self.name)
    }
}

/// Infers the content type of a file from its extension.
pub fn content_type(name: &str) -> Mime {
    let ext = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("png") => mime::IMAGE_PNG,
        Some("gif") => mime::IMAGE_GIF,
        Some("bmp") => mime::IMAGE_BMP,
        _ => mime::TEXT_PLAIN,
    }
}

/// Encodes `files` with a random boundary.
///
/// Returns the value of the `Content-Type` header and the request body.
pub fn encode(files: &[MediaFile]) -> (String, Vec<u8>) {
    let boundary = format!("TwitterRestBoundary{:016x}", rand::random::<u64>());
    let body = encode_with_boundary(files, &boundary);
    (format!("multipart/form-data; boundary={}", boundary), body)
}

pub fn encode_with_boundary(files: &[MediaFile], boundary: &str) -> Vec<u8> {
    let cap = files
        .iter()
        .map(|f| f.data.len() + f.name.len() + boundary.len() + 128)
        .sum::<usize>()
        + boundary.len()
        + 8;
    let mut buf = Vec::with_capacity(cap);

    for file in files {
        buf.extend_from_slice(b"--");
        buf.extend_from_slice(boundary.as_bytes());
        buf.extend_from_slice(b"\r\n");
        buf.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                FIELD_NAME,
                file.name.replace('"', "%22"),
            )
            .as_bytes(),
        );
        buf.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type()).as_bytes());
        buf.extend_from_slice(&file.data);
        buf.extend_from_slice(b"\r\n");
    }

    buf.extend_from_slice(b"--");
    buf.extend_from_slice(boundary.as_bytes());
    buf.extend_from_slice(b"--\r\n");

    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types() {
        assert_eq!(content_type("cat.jpg"), mime::IMAGE_JPEG);
        assert_eq!(content_type("cat.JPEG"), mime::IMAGE_JPEG);
        assert_eq!(content_type("dir/cat.png"), mime::IMAGE_PNG);
        assert_eq!(content_type("cat.gif"), mime::IMAGE_GIF);
        assert_eq!(content_type("cat.bmp"), mime::IMAGE_BMP);
        assert_eq!(content_type("cat.tiff"), mime::TEXT_PLAIN);
        assert_eq!(content_type("cat"), mime::TEXT_PLAIN);
    }

    #[test]
    fn one_part_per_file() {
        let files = [
            MediaFile::new("a.png", &b"PNG"[..]),
            MediaFile::new("b.txt", &b"hello"[..]),
        ];
        let body = encode_with_boundary(&files, "XYZ");
        let expected = "--XYZ\r\n\
            Content-Disposition: form-data; name=\"media[]\"; filename=\"a.png\"\r\n\
            Content-Type: image/png\r\n\
            \r\n\
            PNG\r\n\
            --XYZ\r\n\
            Content-Disposition: form-data; name=\"media[]\"; filename=\"b.txt\"\r\n\
            Content-Type: text/plain\r\n\
            \r\n\
            hello\r\n\
            --XYZ--\r\n";
        assert_eq!(String::from_utf8(body).unwrap(), expected);
    }

    #[test]
    fn random_boundary() {
        let (content_type, body) = encode(&[MediaFile::new("a.gif", &b"GIF"[..])]);
        let boundary = content_type
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap();
        assert!(body.starts_with(format!("--{}\r\n", boundary).as_bytes()));
        assert!(body.ends_with(format!("--{}--\r\n", boundary).as_bytes()));
    }
}
