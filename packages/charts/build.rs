use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");
    let dest_path = Path::new(&out_dir).join("charts.rs");

    let mut entries: Vec<(String, String)> = Vec::new();
    let charts_dir = Path::new("charts");

    if charts_dir.exists() {
        for entry in WalkDir::new(charts_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "cifra"))
        {
            let path = entry.path();
            let name = path
                .strip_prefix(charts_dir)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");
            if let Ok(content) = fs::read_to_string(path) {
                entries.push((name, content));
            }
        }
    }

    let mut code = String::new();
    code.push_str("static CHARTS: &[Chart] = &[\n");
    for (name, content) in &entries {
        // Debug formatting yields a valid, fully escaped Rust string literal
        code.push_str(&format!(
            "    Chart {{ name: {:?}, content: {:?} }},\n",
            name, content
        ));
    }
    code.push_str("];\n");

    fs::write(&dest_path, code).expect("write embedded charts");

    println!("cargo:rerun-if-changed=charts");
}
