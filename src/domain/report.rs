use crate::domain::tally::SpeciesTally;

/// Renders one header per species followed by its tab-indented members.
pub fn render_report(tally: &SpeciesTally) -> Vec<String> {
    let mut lines = Vec::with_capacity(tally.total() + tally.species().count());

    for (species, members) in tally.groups() {
        lines.push(format!("{}: {} animals", species, members.len()));
        lines.extend(members.iter().map(|animal| format!("\t{}", animal)));
    }

    lines
}

/// Joins report lines into file content, one `\n` after each line.
pub fn to_text(lines: &[String]) -> String {
    lines.iter().fold(String::new(), |mut out, line| {
        out.push_str(line);
        out.push('\n');
        out
    })
}
