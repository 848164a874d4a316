use std::io::stdout;

use minos::{draw::TermSink, parse, pattern::MarkerKey, piece::Piece, shape::Shape};

/// Print every shape of a set with its spawn pattern.
///
/// With no argument, shows the seven built-in shapes.  With a path, parses
/// the file as a JSON shape set and shows that instead.
fn main() -> crossterm::Result<()> {
    let mut sink = TermSink::new(stdout());

    match std::env::args().nth(1) {
        Some(path) => {
            let src = std::fs::read_to_string(path)?;

            let defs = match parse::parse(&src) {
                Some(defs) => defs,
                None => {
                    eprintln!("invalid shape set");
                    std::process::exit(1);
                }
            };

            for def in &defs {
                println!("{}", def.name);
                sink.paint(&def.pattern(MarkerKey(0)), def.color)?;
            }
        }
        None => {
            for shape in Shape::ALL {
                let piece = Piece::new(shape);

                println!("{}", shape.name());
                sink.paint(piece.pattern(), piece.square(piece.marker()).color)?;
            }
        }
    }

    Ok(())
}
