use std::collections::BTreeMap;

pub trait CommandName: Copy {
    fn name(self) -> &'static str;
}

/// Immutable mapping from command name to command, built once from a closed
/// list of commands.
#[derive(Debug, Clone)]
pub struct CommandTable<C> {
    entries: BTreeMap<&'static str, C>,
}

impl<C: CommandName> CommandTable<C> {
    pub fn from_commands(commands: &[C]) -> Self {
        let mut entries = BTreeMap::new();
        for command in commands {
            let previous = entries.insert(command.name(), *command);
            debug_assert!(previous.is_none(), "duplicate command {}", command.name());
        }
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<C> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
