// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(test)]
mod tests {
    use crate::common::Error;
    use crate::log::StringLogger;

    #[test]
    fn logger_tests() {
        let log1 = StringLogger::default();
        assert!(log1.is_empty());

        let bar = 123;
        log1.trace(format!("foo {bar}"));
        log1.trace(String::new());
        log1.indent(format!("bar\nbaz"), "  ");
        assert_eq!(log1.to_string(), "foo 123\n  bar\n  baz");
        assert!(!log1.contains_warnings());

        let shared = log1.clone();
        shared.trace("shared".to_string());
        assert_eq!(log1.len(), 3);

        let log2 = StringLogger::new(true);
        let ok: Result<u8, Error> = log2.call("wall.post".to_string(), Ok(1));
        assert!(ok.is_ok());
        assert!(!log2.contains_warnings());
        let err: Result<u8, Error> = log2.call(
            "wall.repost".to_string(),
            Err(Error::Transport("connection refused".to_string())),
        );
        assert!(err.is_err());
        assert!(log2.contains_warnings());
        assert_eq!(
            log2.to_string(),
            "wall.post succeeded\nwall.repost failed: connection refused"
        );
        log2.flush_warnings("logger_tests");
    }
}
