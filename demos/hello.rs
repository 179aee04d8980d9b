use std::path::PathBuf;

use pdfpress::pdf::{
    operator::{begin_text, end_text, move_text, set_font_and_size, show_text},
    ContentStream, Dictionary, Document, Name, Object,
};
use structopt::StructOpt;

/// Write a minimal single-page PDF.
#[derive(StructOpt, Debug)]
#[structopt(name = "hello")]
struct Opt {
    /// Output file
    #[structopt(short, long, parse(from_os_str))]
    output: PathBuf,

    /// Compress the page content stream
    #[structopt(short, long)]
    compress: bool,
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let mut document = Document::new();

    log::debug!("Build page content");
    let operators = vec![
        begin_text(),
        set_font_and_size("F1", 24),
        move_text(100, 700),
        show_text("Hello World and stuff!"),
        end_text(),
    ];
    let content = match ContentStream::of(Dictionary::new(), operators, opt.compress) {
        Ok(content) => content,
        Err(e) => {
            log::error!("Error while encoding content: {}", e);
            return;
        }
    };
    let content_ref = document.push(Object::ContentStream(content));

    let font_ref = document.push(Object::Dictionary(Dictionary::from([
        (Name::from("Type"), Object::Name(Name::from("Font"))),
        (Name::from("Subtype"), Object::Name(Name::from("Type1"))),
        (Name::from("BaseFont"), Object::Name(Name::from("Helvetica"))),
    ])));

    // page tree: catalog -> pages -> page, numbered in push order
    let mut page = Dictionary::from([(Name::from("Type"), Object::Name(Name::from("Page")))]);
    page.insert(
        Name::from("MediaBox"),
        Object::from(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Integer(792),
        ]),
    );
    page.insert(
        Name::from("Resources"),
        Object::Dictionary(Dictionary::from([(
            Name::from("Font"),
            Object::Dictionary(Dictionary::from([(
                Name::from("F1"),
                Object::Reference(font_ref),
            )])),
        )])),
    );
    page.insert(Name::from("Contents"), Object::Reference(content_ref));
    // object numbers are handed out in push order, so the parent's number is
    // known before the pages dictionary itself is pushed
    page.insert(
        Name::from("Parent"),
        Object::Reference(pdfpress::pdf::Reference::new(4, 0)),
    );
    let page_ref = document.push(Object::Dictionary(page));

    let pages_ref = document.push(Object::Dictionary(Dictionary::from([
        (Name::from("Type"), Object::Name(Name::from("Pages"))),
        (Name::from("Count"), Object::Integer(1)),
        (
            Name::from("Kids"),
            Object::from(vec![Object::Reference(page_ref)]),
        ),
    ])));

    let catalog_ref = document.push(Object::Dictionary(Dictionary::from([
        (Name::from("Type"), Object::Name(Name::from("Catalog"))),
        (Name::from("Pages"), Object::Reference(pages_ref)),
    ])));

    document
        .trailer_mut()
        .insert(Name::from("Root"), Object::Reference(catalog_ref));

    log::debug!("Write to file");
    if let Err(e) = pdfpress::write_file(opt.output.as_path(), &document) {
        log::error!("Error while writing: {}", e);
    }
}
