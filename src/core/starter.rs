use crate::core::models::StarterFile;

/// Development-only dependencies installed for every project:
/// bundler + CLI, HTML emission plugin, transform loaders, dev server.
pub const BASE_DEV_DEPENDENCIES: &[&str] = &[
    "webpack",
    "webpack-cli",
    "html-webpack-plugin",
    "style-loader",
    "css-loader",
    "html-loader",
    "webpack-dev-server",
];

/// Test toolchain added by the testing profile: runner, transpiler preset,
/// and the runner's transpiler bridge.
pub const TESTING_DEV_DEPENDENCIES: &[&str] = &["jest", "@babel/preset-env", "babel-jest"];

const BASE_RUN_SCRIPTS: &[(&str, &str)] = &[
    ("build", "webpack --mode production"),
    ("dev", "webpack serve --mode development"),
    ("start", "webpack serve --mode development --open"),
    ("watch", "webpack --watch --mode development"),
];

const TESTING_RUN_SCRIPTS: &[(&str, &str)] = &[
    ("test", "jest"),
    ("test:watch", "jest --watch"),
    ("test:watchAll", "jest --watchAll"),
    ("test:coverage", "jest --coverage"),
];

const TEMPLATE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Webpack App</title>
  </head>
  <body>
    <div id="app"></div>
  </body>
</html>
"#;

const INDEX_JS: &str = r#"console.log('Hello from webpack!');
"#;

const SUM_JS: &str = r#"function sum(a, b) {
  return a + b;
}

module.exports = sum;
"#;

const SUM_TEST_JS: &str = r#"const sum = require('../src/sum');

test('adds 1 + 2 to equal 3', () => {
  expect(sum(1, 2)).toBe(3);
});
"#;

const JEST_CONFIG_JS: &str = r#"module.exports = {
  testEnvironment: 'node',
  verbose: true,
};
"#;

/// Project dependencies for the given profile.
pub fn dev_dependencies(include_testing: bool) -> Vec<&'static str> {
    let mut packages = BASE_DEV_DEPENDENCIES.to_vec();
    if include_testing {
        packages.extend_from_slice(TESTING_DEV_DEPENDENCIES);
    }
    packages
}

/// Run scripts merged into the manifest for the given profile.
pub fn run_scripts(include_testing: bool) -> Vec<(&'static str, &'static str)> {
    let mut scripts = BASE_RUN_SCRIPTS.to_vec();
    if include_testing {
        scripts.extend_from_slice(TESTING_RUN_SCRIPTS);
    }
    scripts
}

/// Directory skeleton, relative to the project root.
pub fn project_directories(include_testing: bool) -> Vec<&'static str> {
    let mut dirs = vec!["src", "dist"];
    if include_testing {
        dirs.push("tests");
    }
    dirs
}

/// Starter files written only where absent, relative to the project root.
pub fn starter_files(include_testing: bool) -> Vec<StarterFile> {
    let mut files = vec![
        StarterFile {
            path: "src/template.html",
            content: TEMPLATE_HTML,
        },
        StarterFile {
            path: "src/index.js",
            content: INDEX_JS,
        },
    ];

    if include_testing {
        files.push(StarterFile {
            path: "src/sum.js",
            content: SUM_JS,
        });
        files.push(StarterFile {
            path: "tests/sum.test.js",
            content: SUM_TEST_JS,
        });
        files.push(StarterFile {
            path: "jest.config.js",
            content: JEST_CONFIG_JS,
        });
    }

    files
}
