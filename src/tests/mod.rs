mod content_hash;
