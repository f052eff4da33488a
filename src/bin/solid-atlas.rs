use anyhow::Context;
use solid_atlas::{
    compose_page, data, parser, Atlas, Catalog, Glyph, Language, PageOptions, RelationshipCell,
    Theme,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(argh::FromArgs)]
/// render the SOLID principles reference page
struct Options {
    #[argh(switch)]
    /// write the HTML page (default when nothing else is selected)
    html: bool,

    #[argh(switch)]
    /// print the principles and their related patterns
    principles: bool,

    #[argh(switch)]
    /// print the patterns and their related principles
    patterns: bool,

    #[argh(switch)]
    /// print the relationship matrix
    matrix: bool,

    #[argh(switch)]
    /// print where the relationship sources disagree
    discrepancies: bool,

    #[argh(switch)]
    /// print the relationship matrix as JSON
    json: bool,

    #[argh(option)]
    /// look up one relationship, e.g. SRP:Observer
    lookup: Option<String>,

    #[argh(option)]
    /// comma separated matrix columns, e.g. "Factory, Facade"
    columns: Option<String>,

    #[argh(switch)]
    /// render every card expanded
    expand: bool,

    #[argh(option)]
    /// initial example tab (typescript, php, python)
    lang: Option<Language>,

    #[argh(switch)]
    /// use the dark theme
    dark: bool,

    #[argh(option, short = 'o')]
    /// output file (defaults to stdout)
    output: Option<PathBuf>,
}

fn load_atlas(opts: &Options) -> Result<Atlas, anyhow::Error> {
    match &opts.columns {
        Some(list) => {
            let columns = parser::pattern_list(list)
                .with_context(|| format!("Invalid column list '{}'", list))?;
            let catalog = Catalog::shipped()?;
            Ok(Atlas::from_parts(catalog, &data::matrix(), &columns)?)
        }
        None => Ok(Atlas::load()?),
    }
}

fn describe(cell: RelationshipCell) -> String {
    match cell {
        RelationshipCell::Absent => "no relationship".to_string(),
        RelationshipCell::PresentUnannotated => "related".to_string(),
        RelationshipCell::PresentWithNote(note) => format!("related: {}", note),
    }
}

fn print_principles(out: &mut dyn Write, atlas: &Atlas) -> std::io::Result<()> {
    for p in atlas.list_principles() {
        writeln!(out, "{:5}{}", p.code.as_str(), p.title)?;
        for r in &p.related_patterns {
            writeln!(out, "     - {}: {}", r.target, r.note.unwrap_or(""))?;
        }
    }
    Ok(())
}

fn print_patterns(out: &mut dyn Write, atlas: &Atlas) -> std::io::Result<()> {
    for p in atlas.list_patterns() {
        let languages: Vec<&str> = p.examples.iter().map(|e| e.language.as_str()).collect();
        writeln!(
            out,
            "{:10}{} [{}] ({})",
            p.name.short_name(),
            p.title,
            p.category.as_str(),
            languages.join(", ")
        )?;
        for r in &p.related_principles {
            writeln!(out, "          - {}: {}", r.target, r.note.unwrap_or(""))?;
        }
    }
    Ok(())
}

fn print_matrix(out: &mut dyn Write, atlas: &Atlas) -> std::io::Result<()> {
    let view = atlas.matrix_view();
    write!(out, "{:32}", "Principle")?;
    for column in &view.columns {
        write!(out, " {:^22}", column)?;
    }
    writeln!(out)?;
    for row in &view.rows {
        write!(out, "{:32}", row.label)?;
        for glyph in &row.cells {
            let marker = match glyph {
                Glyph::AffirmativeWithNote(_) => format!("{}*", glyph.symbol()),
                _ => glyph.symbol().to_string(),
            };
            write!(out, " {:^22}", marker)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "(* has a note, see --lookup)")?;
    Ok(())
}

fn write_output(
    opts: &Options,
    atlas: &Atlas,
    out: &mut dyn Write,
) -> Result<(), anyhow::Error> {
    if let Some(query) = &opts.lookup {
        let (principle, pattern) =
            parser::pair(query).with_context(|| format!("Invalid lookup '{}'", query))?;
        let cell = atlas.lookup(principle, pattern)?;
        writeln!(out, "{} / {}: {}", principle, pattern, describe(cell))?;
        out.flush()?;
        return Ok(());
    }

    if opts.json {
        serde_json::to_writer_pretty(&mut *out, &atlas.matrix_view())?;
        writeln!(out)?;
        out.flush()?;
        return Ok(());
    }

    let listing = opts.principles || opts.patterns || opts.matrix || opts.discrepancies;
    if opts.html || !listing {
        let options = PageOptions {
            expand_all: opts.expand,
            language: opts.lang,
            theme: if opts.dark { Theme::Dark } else { Theme::Light },
            ..PageOptions::default()
        };
        out.write_all(compose_page(atlas, &options).as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    if opts.principles {
        print_principles(out, atlas)?;
    }
    if opts.patterns {
        print_patterns(out, atlas)?;
    }
    if opts.matrix {
        print_matrix(out, atlas)?;
    }
    if opts.discrepancies {
        for d in atlas.discrepancies() {
            writeln!(out, "- {}", d)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn render(opts: &Options) -> Result<(), anyhow::Error> {
    let atlas = load_atlas(opts)?;

    let mut out: Box<dyn Write> = match &opts.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file '{}'", path.display())
        })?)),
        None => Box::new(std::io::stdout().lock()),
    };
    write_output(opts, &atlas, &mut out)
}

pub fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts: Options = argh::from_env();
    render(&opts).with_context(|| "Rendering the atlas failed!")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that remembers whether everything written so far was flushed
    #[derive(Default)]
    struct Sink {
        bytes: Vec<u8>,
        flushed: bool,
    }

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.flushed = false;
            self.bytes.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            self.flushed = true;
            Ok(())
        }
    }

    fn options() -> Options {
        Options {
            html: false,
            principles: false,
            patterns: false,
            matrix: false,
            discrepancies: false,
            json: false,
            lookup: None,
            columns: None,
            expand: false,
            lang: None,
            dark: false,
            output: None,
        }
    }

    fn run(opts: &Options) -> Sink {
        let atlas = Atlas::load().unwrap();
        let mut sink = Sink::default();
        write_output(opts, &atlas, &mut sink).unwrap();
        sink
    }

    #[test]
    fn lookup_output_is_flushed() {
        let opts = Options {
            lookup: Some("SRP:Observer".to_string()),
            ..options()
        };
        let sink = run(&opts);
        assert!(sink.flushed);
        assert_eq!(
            String::from_utf8(sink.bytes).unwrap(),
            "SRP / Observer: related: Separates the observable object from the observers\n"
        );
    }

    #[test]
    fn json_output_is_flushed() {
        let opts = Options {
            json: true,
            ..options()
        };
        let sink = run(&opts);
        assert!(sink.flushed);
        assert!(sink.bytes.ends_with(b"}\n"));
    }

    #[test]
    fn listings_and_page_are_flushed() {
        let opts = Options {
            discrepancies: true,
            ..options()
        };
        assert!(run(&opts).flushed);
        assert!(run(&options()).flushed);
    }
}
