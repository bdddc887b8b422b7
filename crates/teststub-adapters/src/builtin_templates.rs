//! Built-in starter templates.
//!
//! This module provides [`all_templates`], the single entry-point for the
//! template files that ship with Teststub. `teststub init` seeds the
//! configured template directory from these; after that the on-disk copies
//! are the source of truth and can be edited freely.
//!
//! Each template carries all three tokens the engine understands:
//! `<FEATURE_NAME>`, `<IMPORT_PATH>`, and the `// INSERT_TODO_MARKER_HERE`
//! line that pins where the materialized TODO goes.

/// A starter template: suite-type label plus file body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinTemplate {
    pub suite_type: &'static str,
    pub content: &'static str,
}

const UNIT: &str = r#"import { describe, it, expect } from 'vitest';
import * as feature from '<IMPORT_PATH>';

describe('<FEATURE_NAME> (unit)', () => {
  it('exposes its public API', () => {
    expect(feature).toBeDefined();
  });

  // INSERT_TODO_MARKER_HERE
});
"#;

const INTEGRATION: &str = r#"import { describe, it, expect } from 'vitest';
import * as feature from '<IMPORT_PATH>';

describe('<FEATURE_NAME> (integration)', () => {
  it('wires its collaborators together', () => {
    expect(feature).toBeDefined();
  });

  // INSERT_TODO_MARKER_HERE
});
"#;

const A11Y: &str = r#"import { describe, it } from 'vitest';

describe('<FEATURE_NAME> (accessibility)', () => {
  it.todo('has no axe violations in its default state');

  // INSERT_TODO_MARKER_HERE
});
"#;

const API: &str = r#"import { describe, it, expect } from 'vitest';

describe('<FEATURE_NAME> (api)', () => {
  it.todo('responds with the documented contract');

  // INSERT_TODO_MARKER_HERE
});
"#;

/// All starter templates, in the default suite-type order.
pub fn all_templates() -> &'static [BuiltinTemplate] {
    &[
        BuiltinTemplate {
            suite_type: "unit",
            content: UNIT,
        },
        BuiltinTemplate {
            suite_type: "integration",
            content: INTEGRATION,
        },
        BuiltinTemplate {
            suite_type: "a11y",
            content: A11Y,
        },
        BuiltinTemplate {
            suite_type: "api",
            content: API,
        },
    ]
}
