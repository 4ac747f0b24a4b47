pub const DEFAULT_BASE_URL: &str = "http://snapshot.debian.org/archive/debian/";
pub const DEFAULT_DIST: &str = "stretch";
pub const DEFAULT_ARCH: &str = "amd64";

/// Metadata files fetched for every snapshot.
pub const TARGETS: [&str; 2] = ["Release", "Packages.gz"];

/// Directory holding the binary package index of `dist`/`arch` inside a snapshot.
pub fn files_url(base_url: &str, href: &str, dist: &str, arch: &str) -> String {
    format!("{}{}dists/{}/main/binary-{}/", base_url, href, dist, arch)
}

/// Local file name for `target` of the snapshot at `href`.
pub fn save_name(href: &str, target: &str) -> String {
    let stem: String = href
        .chars()
        .filter(|c| !matches!(c, 'T' | 'Z' | '/'))
        .collect();
    format!("{}_{}", stem, target)
}
