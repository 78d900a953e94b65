use percent_encoding::percent_decode_str;
use std::path::Path;

/// 获取对象键最后一段去掉最后一个扩展名后的部分
///
/// # 示例
///
/// ```
/// use cloud_ai_tasks::utils::path::file_stem;
///
/// assert_eq!(file_stem("text/notes/hello.txt"), "hello");
/// assert_eq!(file_stem("text/archive.tar.txt"), "archive.tar");
/// ```
pub fn file_stem(key: &str) -> &str {
    Path::new(key)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
}

/// 使用正斜杠连接多个键组件
///
/// 组件前后的斜杠会被去掉，空组件会被忽略，保证组件之间只有一个正斜杠。
///
/// # 示例
///
/// ```
/// use cloud_ai_tasks::utils::path::join_slash;
///
/// assert_eq!(join_slash(&["audio/", "hello.mp3"]), "audio/hello.mp3");
/// assert_eq!(join_slash(&["", "hello.mp3"]), "hello.mp3");
/// ```
pub fn join_slash(components: &[&str]) -> String {
    components
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// 解码 S3 事件通知中的对象键
///
/// S3 事件中的键采用表单编码：空格写作 `+`，其它字符写作 `%XX`。
/// 解码结果不是合法 UTF-8 时按有损方式替换。
pub fn decode_event_key(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_slash() {
        assert_eq!(join_slash(&["audio", "hello.mp3"]), "audio/hello.mp3");

        // 处理前后斜杠
        assert_eq!(join_slash(&["audio/", "/hello.mp3"]), "audio/hello.mp3");
        assert_eq!(join_slash(&["audio//", "//hello.mp3"]), "audio/hello.mp3");

        // 空组件
        assert_eq!(join_slash(&["audio", "", "hello.mp3"]), "audio/hello.mp3");
        assert_eq!(join_slash(&[]), "");
        assert_eq!(join_slash(&["/", "/"]), "");
    }

    #[test]
    fn test_file_stem_uses_last_segment() {
        assert_eq!(file_stem("text/a/b/c.txt"), "c");
        assert_eq!(file_stem("hello"), "hello");
        assert_eq!(file_stem(""), "");
    }

    #[test]
    fn test_decode_event_key() {
        assert_eq!(decode_event_key("text/my+notes.txt"), "text/my notes.txt");
        assert_eq!(decode_event_key("text/caf%C3%A9.txt"), "text/café.txt");
        assert_eq!(decode_event_key("text/a%2Bb.txt"), "text/a+b.txt");
        assert_eq!(decode_event_key("text/plain.txt"), "text/plain.txt");
    }
}
