use itertools::Itertools;

use crate::convention::Convention;

const TESTING_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/templates/testing_runner.c"
));

const RUNTIME_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/templates/runtime_runner.c"
));

const FILE_SLOT: &str = "/* replace_file */";
const TESTS_SLOT: &str = "/* replace_tests */";

/// Named slots substituted into a runner skeleton.
struct RunnerSlots<'a> {
    file_body: &'a str,
    call_block: &'a str,
}

/// Builds the full runner text: the original file reproduced verbatim,
/// followed by an entry point invoking every test in order.
pub fn synthesize(convention: Convention, file_body: &str, tests: &[String]) -> String {
    let call_block = tests
        .iter()
        .map(|name| call_statement(convention, name))
        .join("");

    render(
        template(convention),
        RunnerSlots {
            file_body,
            call_block: &call_block,
        },
    )
}

fn template(convention: Convention) -> &'static str {
    match convention {
        Convention::CommentMarker => TESTING_TEMPLATE,
        Convention::SignatureMarker => RUNTIME_TEMPLATE,
    }
}

fn call_statement(convention: Convention, name: &str) -> String {
    match convention {
        Convention::CommentMarker => format!("    {}(state);\n", name),
        Convention::SignatureMarker => format!("    {}(TestInit(argc, argv));\n", name),
    }
}

fn render(template: &str, slots: RunnerSlots) -> String {
    template
        .replace(FILE_SLOT, slots.file_body)
        .replace(TESTS_SLOT, slots.call_block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::TestCollector;

    #[test]
    fn testing_runner_matches_expected_layout() {
        let output = synthesize(
            Convention::CommentMarker,
            "void TestFoo(object state) {}",
            &["TestFoo".to_string()],
        );

        let expected = r#"// Auto-generated
#include <avium/testing.h>
void TestFoo(object state) {}

int main(void)
{
    object state = TestInit();

    TestFoo(state);

    TestFini(state);
}
"#;
        assert_eq!(output, expected);
    }

    #[test]
    fn runtime_runner_matches_expected_layout() {
        let output = synthesize(
            Convention::SignatureMarker,
            "__test TestBool(object state) {}",
            &["TestBool".to_string()],
        );

        let expected = r#"// Auto-generated
#include <avium/runtime.h>
__test TestBool(object state) {}

int main(int argc, str argv[])
{
    AvmEnableExceptions();
    TestBool(TestInit(argc, argv));

}
"#;
        assert_eq!(output, expected);
    }

    #[test]
    fn one_call_per_test_in_order() {
        let tests: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let output = synthesize(Convention::CommentMarker, "", &tests);

        let positions: Vec<usize> = tests
            .iter()
            .map(|name| {
                let call = format!("    {}(state);\n", name);
                assert_eq!(output.matches(&call).count(), 1, "missing call to {}", name);
                output.find(&call).unwrap()
            })
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn no_tests_still_produces_a_runner() {
        let output = synthesize(Convention::CommentMarker, "int helper(void) { return 0; }", &[]);

        assert!(output.contains("int main(void)"));
        assert!(output.contains("    TestFini(state);"));
        assert!(!output.contains("helper(state);"));
    }

    #[test]
    fn synthesis_is_deterministic() {
        let tests = vec!["TestA".to_string(), "TestB".to_string()];
        let first = synthesize(Convention::SignatureMarker, "/* body */", &tests);
        let second = synthesize(Convention::SignatureMarker, "/* body */", &tests);
        assert_eq!(first, second);
    }

    #[test]
    fn only_marked_functions_are_invoked() {
        let source = "// TEST\nvoid a(void){}\nvoid b(void){}";
        let tests = TestCollector::new(Convention::CommentMarker).collect(source.lines());
        let output = synthesize(Convention::CommentMarker, source, &tests);

        assert_eq!(output.matches("    a(state);\n").count(), 1);
        assert!(!output.contains("    b(state);"));
    }
}
