/// Part name helpers for package members.
///
/// Part names are zip member names without a leading slash, e.g.
/// `xl/drawings/drawing1.xml`. Relationship targets are relative to the
/// directory of their source part and may climb with `../`.

/// The member name of the content types part.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// Get the directory portion of a part name.
///
/// For example, "xl/drawings" for "xl/drawings/drawing1.xml".
pub fn base_dir(part: &str) -> &str {
    match part.rfind('/') {
        Some(pos) => &part[..pos],
        None => "",
    }
}

/// Get the filename portion of a part name.
pub fn filename(part: &str) -> &str {
    match part.rfind('/') {
        Some(pos) => &part[pos + 1..],
        None => part,
    }
}

/// Get the relationships part that belongs to a part.
///
/// For example, "xl/drawings/_rels/drawing1.xml.rels" for "xl/drawings/drawing1.xml".
pub fn rels_part(part: &str) -> String {
    let dir = base_dir(part);
    if dir.is_empty() {
        format!("_rels/{}.rels", filename(part))
    } else {
        format!("{}/_rels/{}.rels", dir, filename(part))
    }
}

/// Get the source part a relationships part belongs to, if `rels` is one.
pub fn source_of_rels(rels: &str) -> Option<String> {
    let name = filename(rels).strip_suffix(".rels")?;
    let dir = base_dir(rels);
    let owner_dir = dir.strip_suffix("_rels")?.trim_end_matches('/');
    if owner_dir.is_empty() {
        Some(name.to_string())
    } else {
        Some(format!("{}/{}", owner_dir, name))
    }
}

/// Resolve a relationship target against the directory of its source part.
///
/// Absolute targets ("/xl/media/image1.png") are taken from the package root.
pub fn resolve_target(source_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return normalize_path(absolute);
    }
    if source_dir.is_empty() {
        normalize_path(target)
    } else {
        normalize_path(&format!("{}/{}", source_dir, target))
    }
}

/// Get the reference to `part` relative to the directory `from_dir`.
///
/// For example, "../charts/chart1.xml" for "xl/charts/chart1.xml" from "xl/drawings".
pub fn relative_ref(from_dir: &str, part: &str) -> String {
    let from_parts: Vec<&str> = from_dir.split('/').filter(|s| !s.is_empty()).collect();
    let to_parts: Vec<&str> = part.split('/').filter(|s| !s.is_empty()).collect();

    let common = from_parts
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = String::new();
    for _ in common..from_parts.len() {
        result.push_str("../");
    }
    result.push_str(&to_parts[common..].join("/"));
    result
}

/// Get the numeric suffix of a part filename.
///
/// Returns 21 for "xl/charts/chart21.xml" and None for "xl/workbook.xml".
pub fn index_of(part: &str) -> Option<u32> {
    let name = filename(part);
    let stem = match name.rfind('.') {
        Some(pos) => &name[..pos],
        None => name,
    };
    let digits = stem.len() - stem.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 || digits == stem.len() {
        return None;
    }
    stem[stem.len() - digits..].parse().ok()
}

/// Resolve "." and ".." segments.
fn normalize_path(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                parts.pop();
            },
            _ => parts.push(segment),
        }
    }
    parts.join("/")
}
