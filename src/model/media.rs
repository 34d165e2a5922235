use std::path::Path;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    Png,
    Svg,
    Jpeg,
    Gif,
    Webp,
    Ico,
    Other,
}

impl MediaType {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => Self::Png,
            "svg" => Self::Svg,
            "jpg" | "jpeg" => Self::Jpeg,
            "gif" => Self::Gif,
            "webp" => Self::Webp,
            "ico" => Self::Ico,
            _ => Self::Other,
        }
    }

    pub const fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
            Self::Ico => "image/x-icon",
            Self::Other => "application/octet-stream",
        }
    }
}
