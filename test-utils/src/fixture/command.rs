//! Command source fixtures.
//!
//! Renders command files in the declarative shape the bot's command modules use: an exported
//! object literal whose leading fields carry the metadata, followed by the handler body.

/// Bytes that are not valid UTF-8 and contain no metadata fields.
pub const BINARY_SOURCE: &[u8] = &[0x00, 0xff, 0xfe, 0x9f, 0x92, 0x96, 0x00, 0xc3, 0x28, 0x0a];

/// Builder for a command source file.
///
/// Every field is optional so tests can drop any one of them. `new` sets the two fields
/// required for a command to be indexed.
#[derive(Debug, Clone, Default)]
pub struct CommandSource {
    name: Option<String>,
    description: Option<String>,
    usage: Option<String>,
    category: Option<String>,
    aliases: Option<Vec<String>>,
    enabled_slash: Option<bool>,
    cooldown: Option<u64>,
}

impl CommandSource {
    /// Creates a source declaring `name` and `description`.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            ..Self::default()
        }
    }

    /// Creates a source with no metadata fields at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Removes the `description` field, making the source unindexable.
    pub fn without_description(mut self) -> Self {
        self.description = None;
        self
    }

    pub fn usage(mut self, usage: &str) -> Self {
        self.usage = Some(usage.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = Some(aliases.iter().map(|alias| alias.to_string()).collect());
        self
    }

    pub fn enabled_slash(mut self, enabled: bool) -> Self {
        self.enabled_slash = Some(enabled);
        self
    }

    pub fn cooldown(mut self, seconds: u64) -> Self {
        self.cooldown = Some(seconds);
        self
    }

    /// Renders the source text.
    ///
    /// # Returns
    /// - `String` - Source text with each configured field on its own line
    pub fn render(&self) -> String {
        let mut out = String::from("export default {\n");

        if let Some(name) = &self.name {
            out.push_str(&format!("  name: \"{name}\",\n"));
        }
        if let Some(description) = &self.description {
            out.push_str(&format!("  description: \"{description}\",\n"));
        }
        if let Some(usage) = &self.usage {
            out.push_str(&format!("  usage: \"{usage}\",\n"));
        }
        if let Some(category) = &self.category {
            out.push_str(&format!("  category: \"{category}\",\n"));
        }
        if let Some(aliases) = &self.aliases {
            let quoted: Vec<String> = aliases.iter().map(|alias| format!("'{alias}'")).collect();
            out.push_str(&format!("  aliases: [{}],\n", quoted.join(", ")));
        }
        if let Some(enabled) = self.enabled_slash {
            out.push_str(&format!("  enabledSlash: {enabled},\n"));
        }
        if let Some(cooldown) = self.cooldown {
            out.push_str(&format!("  cooldown: {cooldown},\n"));
        }

        out.push_str("  async execute(client, message, args) {\n");
        out.push_str("    return message.reply({ content: \"ok\" });\n");
        out.push_str("  },\n");
        out.push_str("};\n");
        out
    }
}

