use crate::domain::model::Day;

/// Comment block the solver replaces with the day's instructions.
pub const INSTRUCTIONS_PLACEHOLDER: &str = "PLACEHOLDER_FOR_INSTRUCTIONS";

/// Comment block for the second half of the puzzle, which only unlocks later.
pub const INSTRUCTIONS_PART_2_PLACEHOLDER: &str = "PLACEHOLDER_FOR_INSTRUCTIONS_PART_2";

/// Render the solution stub for one day. The input file is pulled in with
/// `include_str!`, so the stub compiles as soon as the input file exists
/// next to it.
pub fn render_stub(day: Day, with_tests: bool) -> String {
    let mut stub = format!(
        r#"/*
{part_1}
*/

/*
{part_2}
*/

static INPUT: &str = include_str!("{input_file}");

fn main() {{

}}
"#,
        part_1 = INSTRUCTIONS_PLACEHOLDER,
        part_2 = INSTRUCTIONS_PART_2_PLACEHOLDER,
        input_file = day.input_file_name(),
    );

    if with_tests {
        stub.push_str(&format!(
            r#"
#[cfg(test)]
mod tests {{
    use super::*;

    static TEST_INPUT: &str = include_str!("{test_input_file}");

    #[test]
    fn test_part1() {{
    }}
}}
"#,
            test_input_file = day.test_input_file_name(),
        ));
    }

    stub
}
