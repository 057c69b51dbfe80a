use serde::{Deserialize, Serialize};

/// Body of `GET /v2/auth/temporary`.
#[derive(Deserialize, Debug, Default)]
pub struct TokenResponse {
    pub token: Option<String>,
}

/// Body of `GET /v2/gifs/{id}`. Only the media URLs are read.
#[derive(Deserialize, Debug, Default)]
pub struct GifResponse {
    pub gif: Option<GifInfo>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GifInfo {
    pub urls: Option<MediaUrls>,
}

/// Candidate media URLs keyed by quality tier.
#[derive(Deserialize, Debug, Default)]
pub struct MediaUrls {
    pub hd: Option<String>,
    pub sd: Option<String>,
    pub gif: Option<String>,
}

impl MediaUrls {
    /// Best available URL: `hd`, then `sd`, then `gif`. Empty strings count as absent.
    pub fn best(&self) -> Option<&str> {
        [&self.hd, &self.sd, &self.gif]
            .into_iter()
            .filter_map(|url| url.as_deref())
            .find(|url| !url.is_empty())
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ResolvedClip {
    pub id: String,
    pub mp4: String,
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(hd: Option<&str>, sd: Option<&str>, gif: Option<&str>) -> MediaUrls {
        MediaUrls {
            hd: hd.map(String::from),
            sd: sd.map(String::from),
            gif: gif.map(String::from),
        }
    }

    #[test]
    fn best_prefers_hd_then_sd_then_gif() {
        assert_eq!(urls(Some("A"), Some("B"), Some("C")).best(), Some("A"));
        assert_eq!(urls(None, Some("B"), Some("C")).best(), Some("B"));
        assert_eq!(urls(None, None, Some("C")).best(), Some("C"));
        assert_eq!(urls(None, None, None).best(), None);
    }

    #[test]
    fn best_skips_empty_strings() {
        assert_eq!(urls(Some(""), Some("B"), None).best(), Some("B"));
        assert_eq!(urls(Some(""), Some(""), Some("")).best(), None);
    }

    #[test]
    fn gif_response_tolerates_missing_fields() {
        let body: GifResponse = serde_json::from_str(r#"{"gif":{"id":"x"}}"#).unwrap();
        assert!(body.gif.unwrap().urls.is_none());

        let body: GifResponse = serde_json::from_str(r#"{"errorMessage":"nope"}"#).unwrap();
        assert!(body.gif.is_none());
    }
}
