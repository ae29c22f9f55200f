// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Licenser Contributors

use std::cell::OnceCell;
use std::io::BufRead;

use cu::pre::*;

use crate::CommentStyle;

/// Number of leading lines scanned when detecting a license
pub const SCAN_LINES: usize = 20;

/// The built-in license kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseKind {
    /// Apache License, Version 2.0
    Apache20,
    /// The MIT license
    Mit,
}

impl LicenseKind {
    /// Name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Self::Apache20 => "Apache20",
            Self::Mit => "MIT",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Self::Apache20 => APACHE20_TEMPLATE,
            Self::Mit => MIT_TEMPLATE,
        }
    }

    /// Phrase that marks the license as present.
    ///
    /// Only this exact substring is looked for, so a header that was
    /// reworded or re-wrapped will not be recognized.
    pub fn signature(self) -> &'static str {
        match self {
            Self::Apache20 => "Licensed under the Apache License, Version 2.0",
            Self::Mit => {
                "Permission is hereby granted, free of charge, to any person obtaining a copy"
            }
        }
    }

    /// Parse the name used on the command line
    pub fn from_name(s: &str) -> cu::Result<Self> {
        match s {
            "Apache20" => Ok(Self::Apache20),
            "MIT" => Ok(Self::Mit),
            _ => cu::bail!("unknown license type: '{s}' (supported: Apache20, MIT)"),
        }
    }
}

/// License handler: renders the license text and detects it in files
#[derive(Debug, Clone)]
pub struct License {
    kind: LicenseKind,
    year: i32,
    owner: String,
    rendered: OnceCell<String>,
}

impl License {
    pub fn new(kind: LicenseKind, year: i32, owner: impl Into<String>) -> Self {
        Self {
            kind,
            year,
            owner: owner.into(),
            rendered: OnceCell::new(),
        }
    }

    pub fn kind(&self) -> LicenseKind {
        self.kind
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Change the owner. Any cached rendering is dropped.
    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
        self.rendered = OnceCell::new();
    }

    /// Change the year. Any cached rendering is dropped.
    pub fn set_year(&mut self, year: i32) {
        self.year = year;
        self.rendered = OnceCell::new();
    }

    /// The rendered license text, as an owned copy of the cache
    pub fn render(&self) -> Vec<u8> {
        self.rendered().as_bytes().to_vec()
    }

    fn rendered(&self) -> &str {
        self.rendered.get_or_init(|| {
            cu::trace!("rendering {} license template", self.kind.name());
            self.kind
                .template()
                .replace("{year}", &self.year.to_string())
                .replace("{owner}", &self.owner)
        })
    }

    /// The header to insert into a file: the rendered license wrapped
    /// in `style`, followed by one empty line
    pub fn header(&self, style: CommentStyle) -> String {
        let mut header = style.wrap(self.rendered());
        header.push('\n');
        header
    }

    /// Check if the signature of this license appears in the first
    /// [`SCAN_LINES`] lines of `reader`.
    ///
    /// This is a plain substring match, not a full comparison of the text.
    pub fn is_present(&self, mut reader: impl BufRead) -> cu::Result<bool> {
        let signature = self.kind.signature();
        let mut line = Vec::new();
        for _ in 0..SCAN_LINES {
            line.clear();
            let n = reader
                .read_until(b'\n', &mut line)
                .context("failed to read line")?;
            if n == 0 {
                break;
            }
            if String::from_utf8_lossy(&line).contains(signature) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

const APACHE20_TEMPLATE: &str = r#"Copyright {year} {owner}

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License."#;

const MIT_TEMPLATE: &str = r#"Copyright (c) {year} {owner}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE."#;
