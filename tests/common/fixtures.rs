//! Static feed bodies used across harnesses.
//!
//! `FEED_JSON` mirrors the real endpoint's shape, including the envelope
//! fields and per-item fields the decoder is expected to ignore
//! (description, published, author_id). The malformed variants each break
//! the decode in a different place.

/// A well-formed feed body with three items: the canonical titled pair plus
/// one untitled, untagged item.
pub const FEED_JSON: &str = r#"{
    "title": "Recent Uploads tagged test",
    "link": "https://www.flickr.com/photos/",
    "description": "",
    "modified": "2022-11-29T02:21:57Z",
    "generator": "https://www.flickr.com",
    "items": [
        {
            "title": "My title",
            "link": "https://flickr.example/photos/52530770181",
            "media": {"m": "https://live.staticflickr.example/65535/52530770181_m.jpg"},
            "date_taken": "2022-11-28T18:21:57-08:00",
            "description": "<p>posted a photo</p>",
            "published": "2022-11-29T02:21:57Z",
            "author": "nobody@flickr.com (\"Ww Yo\")",
            "author_id": "196444568@N02",
            "tags": "tag1 tag2 tag3 tag4"
        },
        {
            "title": "Hail U",
            "link": "https://flickr.example/photos/52528932677",
            "media": {"m": "https://live.staticflickr.example/65535/52528932677_m.jpg"},
            "date_taken": "2022-11-22T10:35:42-08:00",
            "description": "<p>posted a photo</p>",
            "published": "2022-11-22T18:35:42Z",
            "author": "nobody@flickr.com (\"You 2\")",
            "author_id": "196812558@N07",
            "tags": "tag3 tag4 tag33"
        },
        {
            "title": null,
            "link": "https://flickr.example/photos/52530777777",
            "media": {"m": "https://live.staticflickr.example/65535/52530777777_m.jpg"},
            "date_taken": "2022-11-25T09:12:00+01:00",
            "description": "",
            "published": "2022-11-25T08:12:00Z",
            "author": "nobody@flickr.com",
            "author_id": "111111111@N00",
            "tags": ""
        }
    ]
}"#;

/// A valid feed with no items. Valid, not an error.
pub const FEED_JSON_EMPTY: &str = r#"{"title": "Recent Uploads", "items": []}"#;

/// Truncated mid-object; JSON parsing fails.
pub const FEED_JSON_MALFORMED: &str = r#"{"items": [{"title": "My ti"#;

/// Structurally valid JSON but an unparseable `date_taken` in the second
/// item. The whole response must fail — no partial list.
pub const FEED_JSON_BAD_DATE: &str = r#"{
    "items": [
        {
            "title": "Fine",
            "link": "https://flickr.example/photos/1",
            "media": {"m": "https://flickr.example/photos/1/m.jpg"},
            "date_taken": "2022-11-28T18:21:57-08:00",
            "author": "nobody@flickr.com (\"Ok\")",
            "tags": "tag1"
        },
        {
            "title": "Broken",
            "link": "https://flickr.example/photos/2",
            "media": {"m": "https://flickr.example/photos/2/m.jpg"},
            "date_taken": "yesterday-ish",
            "author": "nobody@flickr.com (\"Nope\")",
            "tags": "tag1"
        }
    ]
}"#;

/// Valid JSON without the top-level `items` field.
pub const FEED_JSON_WRONG_SHAPE: &str = r#"{"stat": "ok", "photos": []}"#;
