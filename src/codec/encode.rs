//! CSV encoding of transform output.

/// Join each row's cells with `,` and terminate every row with `\n`.
pub fn encode<R: AsRef<[String]>>(rows: &[R]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&row.as_ref().join(","));
        out.push('\n');
    }
    out
}
