use anyhow::{Context, Result, bail};
use marginalia_config::Palette;
use marginalia_engine::{
    AnnotationRecord, ColorSpec, HostBuffer, RecordSink, SyncController, canonicalize,
    encode_highlight, erase_highlights, extract_annotations,
    grammar::Indicator,
    io,
};
use relative_path::RelativePathBuf;
use std::{env, fs, path::Path, process};

const USAGE: &str = "Usage: marginalia <command> [args]

Commands:
  canonicalize <path>     Normalize annotation markup in a file or folder
  sync <file>             Reconcile one file and print its annotations
  extract <file>          List the annotations in a file
  strip <file>            Remove all highlight markup from a file
  apply <file> <start> <end> <color> [--note <text>] [--tags <a,b,...>]
                          Highlight a byte range of the file";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let Some(command) = args.first() else {
        bail!("{USAGE}");
    };

    match command.as_str() {
        "canonicalize" => cmd_canonicalize(args.get(1).map(String::as_str)),
        "sync" => cmd_sync(required(args, 1, "file")?),
        "extract" => cmd_extract(required(args, 1, "file")?),
        "strip" => cmd_strip(required(args, 1, "file")?),
        "apply" => cmd_apply(&args[1..]),
        _ => bail!("unknown command `{command}`\n\n{USAGE}"),
    }
}

fn required<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("missing <{name}> argument\n\n{USAGE}"))
}

/// Normalizes one file, or every markdown file under a folder, rewriting
/// only the files whose canonical form differs.
fn cmd_canonicalize(path: Option<&str>) -> Result<()> {
    let path = Path::new(path.with_context(|| format!("missing <path> argument\n\n{USAGE}"))?);

    if path.is_dir() {
        let mut rewritten = 0;
        let files = io::scan_markdown_files(path)?;
        let total = files.len();
        for file in files {
            let rel = RelativePathBuf::from_path(file.strip_prefix(path)?)
                .context("non-UTF-8 path in notes folder")?;
            let content = io::read_file(&rel, path)?;
            let canonical = canonicalize(&content);
            if canonical != content {
                io::write_file(&rel, path, &canonical)?;
                rewritten += 1;
                println!("rewrote {rel}");
            }
        }
        println!("{rewritten} of {total} files rewritten");
    } else {
        let content = fs::read_to_string(path)?;
        let canonical = canonicalize(&content);
        if canonical != content {
            fs::write(path, &canonical)?;
            println!("rewrote {}", path.display());
        } else {
            println!("already canonical");
        }
    }
    Ok(())
}

/// A file standing in for the host editor's buffer.
struct FileHost<'a> {
    path: &'a Path,
    cursor: usize,
}

impl HostBuffer for FileHost<'_> {
    fn text(&self) -> Result<String> {
        fs::read_to_string(self.path).context("reading buffer")
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        fs::write(self.path, text).context("writing buffer")
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset;
    }
}

struct StdoutSink;

impl RecordSink for StdoutSink {
    fn render(&mut self, records: &[AnnotationRecord]) {
        print_records(records);
    }
}

/// Runs one full sync cycle against the file, as the editor would on a
/// change notification.
fn cmd_sync(file: &str) -> Result<()> {
    let mut host = FileHost {
        path: Path::new(file),
        cursor: 0,
    };
    let mut sink = StdoutSink;
    SyncController::new().handle_notification(&mut host, &mut sink);
    Ok(())
}

fn cmd_extract(file: &str) -> Result<()> {
    let content = fs::read_to_string(file)?;
    print_records(&extract_annotations(&content));
    Ok(())
}

fn print_records(records: &[AnnotationRecord]) {
    if records.is_empty() {
        println!("No highlights found");
        return;
    }
    for record in records {
        println!("\"{}\"", record.text);
        if let Some(color) = &record.color {
            match color {
                ColorSpec::Named(name) => println!("  color: {name}"),
                ColorSpec::Value(value) => println!("  color: {value}"),
            }
        }
        if let Some(note) = &record.note {
            println!("  note: {note}");
        }
        if !record.tags.is_empty() {
            println!("  tags: {}", record.tags.join(" "));
        }
    }
}

/// Removes all highlight markup from the file. With whole-file context the
/// indicator elements can go too, not just the tags.
fn cmd_strip(file: &str) -> Result<()> {
    let content = fs::read_to_string(file)?;
    let stripped = erase_highlights(&content).replace(Indicator::ELEMENT, "");
    fs::write(file, stripped)?;
    Ok(())
}

fn cmd_apply(args: &[String]) -> Result<()> {
    let file = required(args, 0, "file")?;
    let start: usize = required(args, 1, "start")?.parse().context("bad <start>")?;
    let end: usize = required(args, 2, "end")?.parse().context("bad <end>")?;
    let color_name = required(args, 3, "color")?;

    let mut note = None;
    let mut tags: Vec<String> = Vec::new();
    let mut rest = args[4..].iter();
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--note" => note = Some(rest.next().context("--note needs a value")?.clone()),
            "--tags" => {
                tags = rest
                    .next()
                    .context("--tags needs a value")?
                    .split(',')
                    .map(str::to_string)
                    .collect();
            }
            other => bail!("unknown flag `{other}`\n\n{USAGE}"),
        }
    }

    let palette = Palette::load()?.unwrap_or_default();
    let color = palette
        .color_spec(color_name)
        .or_else(|| {
            // Not a palette entry; accept a raw CSS value directly
            (color_name.starts_with('#') || color_name.starts_with("rgb"))
                .then(|| ColorSpec::Value(color_name.to_string()))
        })
        .with_context(|| format!("unknown color `{color_name}`"))?;

    let content = fs::read_to_string(file)?;
    if end > content.len() || start > end || !content.is_char_boundary(start) || !content.is_char_boundary(end)
    {
        bail!("range {start}..{end} is not a valid selection of {file}");
    }

    let encoded = encode_highlight(&content[start..end], &color, note.as_deref(), &tags);
    let replaced = format!("{}{}{}", &content[..start], encoded, &content[end..]);
    fs::write(file, replaced)?;
    Ok(())
}
