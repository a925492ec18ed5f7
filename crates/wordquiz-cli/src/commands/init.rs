//! The `wordquiz init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("wordquiz.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("words"), SAMPLE_WORDS)?;

    println!("\nNext steps:");
    println!("  1. Add your own pairs to `words` (one `english;finnish` pair per line)");
    println!("  2. Run: wordquiz play");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# wordquiz configuration

# Word file: one `source;target` pair per line.
words_file = "words"

# Uncomment to skip the mode menu ("forward" or "reverse").
# direction = "forward"

[languages]
source = "English"
target = "Finnish"
"#;

const SAMPLE_WORDS: &str = "dog;koira
cat;kissa
house;talo
water;vesi
tree;puu
book;kirja
sun;aurinko
moon;kuu
bread;leipä
milk;maito
friend;ystävä
city;kaupunki
";
