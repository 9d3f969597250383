//! TestRepo builder for integration testing
//!
//! Creates throwaway JavaScript/TypeScript projects in a temp directory and
//! runs the export-map binary against them.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Builder for creating test project structures
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty test project
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the path to the project root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get path as string
    pub fn path_str(&self) -> String {
        self.dir.path().to_string_lossy().to_string()
    }

    /// Add a source file with the given content
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Add an empty file
    pub fn add_empty_file(&self, relative_path: &str) -> &Self {
        self.add_file(relative_path, "")
    }

    /// Create an empty directory
    pub fn add_dir(&self, relative_path: &str) -> &Self {
        fs::create_dir_all(self.dir.path().join(relative_path)).expect("Failed to create dir");
        self
    }

    /// Add a TypeScript file exporting one function
    pub fn add_ts_function(&self, relative_path: &str, name: &str, body: &str) -> &Self {
        self.add_file(
            relative_path,
            &format!("export function {}() {{\n    {}\n}}\n", name, body),
        )
    }

    /// Write `package.json` with the given runtime dependencies
    pub fn with_package_json(&self, dependencies: &[&str]) -> &Self {
        let deps: Vec<String> = dependencies
            .iter()
            .map(|d| format!("\"{}\": \"*\"", d))
            .collect();
        self.add_file(
            "package.json",
            &format!(
                "{{\n  \"name\": \"fixture\",\n  \"dependencies\": {{ {} }}\n}}\n",
                deps.join(", ")
            ),
        )
    }

    /// Run the export-map binary in the project root and return its output
    pub fn run_cli(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_export-map"))
            .current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("EXPORT_MAP_CONFIG")
            .args(args)
            .output()
    }

    /// Run CLI and expect success, return stdout
    pub fn run_cli_success(&self, args: &[&str]) -> String {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            output.status.success(),
            "CLI command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run CLI and expect failure, return (stdout, stderr)
    pub fn run_cli_failure(&self, args: &[&str]) -> (String, String) {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            !output.status.success(),
            "CLI command {:?} should have failed",
            args
        );
        (
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }

    // ========================================================================
    // PRE-BUILT PROJECT STRUCTURES
    // ========================================================================

    /// Next.js app router project with features, hooks, lib and components
    pub fn with_nextjs_app(&self) -> &Self {
        self.with_package_json(&["next", "react", "react-dom"])
            .add_empty_file("next.config.mjs")
            .add_file(
                "app/(marketing)/about/page.tsx",
                "export default function AboutPage() {\n  return null;\n}\n",
            )
            .add_file(
                "app/admin/orders/page.tsx",
                "export default function OrdersPage() {}\n",
            )
            .add_dir("app/admin/orders/[orderId]")
            .add_dir("app/admin/users")
            .add_dir("app/_components")
            .add_file(
                "app/api/users/route.ts",
                "export async function GET() {}\nexport async function POST() {}\n",
            )
            .add_file(
                "src/features/billing/actions.ts",
                "export async function createInvoice() {}\nexport const updateInvoice = async (id: string) => {};\n",
            )
            .add_file(
                "src/features/billing/types.ts",
                "export type InvoiceId = string;\nexport interface Invoice { id: InvoiceId }\n",
            )
            .add_file(
                "src/hooks/useCart.ts",
                "export function useCart() {}\nexport const CART_KEY = 'cart';\n",
            )
            .add_file(
                "src/lib/format.ts",
                "export const formatPrice = (n: number) => `$${n}`;\nexport const CURRENCY = 'USD';\n",
            )
            .add_file(
                "src/components/ui/button.tsx",
                "export function Button() {}\nexport default Button;\n",
            )
    }

    /// Express API in CommonJS style
    pub fn with_express_api(&self) -> &Self {
        self.with_package_json(&["express", "mongoose"])
            .add_file(
                "src/routes/users.js",
                "const router = require('express').Router();\nmodule.exports = router;\n",
            )
            .add_file(
                "src/controllers/userController.js",
                "exports.getUser = async (req, res) => {};\nexports.listUsers = function (req, res) {};\n",
            )
            .add_file(
                "src/models/User.js",
                "const schema = new Schema({});\nmodule.exports = mongoose.model('User', schema);\n",
            )
            .add_file(
                "src/config/db.js",
                "exports.DB_URL = process.env.DB_URL;\nexports.settings = { pool: 5 };\nexports.timeout = 30;\n",
            )
            .add_file(
                "src/server.js",
                "function start() {}\nmodule.exports = { start, stop: start };\n",
            )
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
