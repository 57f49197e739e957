use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedScript {
    pub module: Module,
    /// Position of the first byte of the source within the parser's source
    /// map. Subtract it from any span to get an offset into the source text.
    pub start_pos: BytePos,
}

/// Parse script source code into an AST.
///
/// Every script dialect goes through the TSX grammar, which is a superset of
/// the others. Parsing is best-effort: recoverable syntax errors are dropped
/// and traversal runs over whatever tree was produced. Only an unrecoverable
/// parser failure returns an error.
pub fn parse_script_source(code: &str, file_path: &str) -> Result<ParsedScript> {
    let source_map = SourceMap::default();
    let source_file =
        source_map.new_source_file(FileName::Real(file_path.into()).into(), code.to_string());

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
    let module = parser
        .parse_module()
        .map_err(|e| anyhow!("Failed to parse script: {:?}", e))?;
    // recoverable errors are intentionally ignored
    let _ = parser.take_errors();
    Ok(ParsedScript {
        module,
        start_pos: source_file.start_pos,
    })
}
