// Priority-ordered action rules with press/hold/release edge detection

use super::state::InputState;
use super::InputError;
use std::collections::HashSet;
use std::fmt;

/// Extra predicate evaluated against the input and the controlled context
pub type CustomCheck<C> = Box<dyn Fn(&InputState, &C) -> bool>;

/// Behavior fired on an action edge or while it is held
pub type ActionCallback<C> = Box<dyn FnMut(&mut C, &InputState)>;

/// When an action matches the current input
pub struct ActionCondition<C> {
    /// Keys checked against the input (stored lowercase)
    pub keys: Vec<String>,
    /// All keys must be held (`true`) or any one of them (`false`)
    pub require_all: bool,
    /// None of these keys may be held
    pub require_none: Vec<String>,
    /// Evaluated first; a failing check short-circuits the condition
    pub custom_check: Option<CustomCheck<C>>,
}

impl<C> ActionCondition<C> {
    /// Condition satisfied when all the given keys are held
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keys: lowercase_all(keys),
            require_all: true,
            require_none: Vec::new(),
            custom_check: None,
        }
    }

    /// Condition with no key requirements (always true unless a check is added)
    pub fn always() -> Self {
        Self::keys(Vec::<String>::new())
    }

    /// Match when any one of the keys is held instead of all of them
    pub fn any(mut self) -> Self {
        self.require_all = false;
        self
    }

    /// Keys that must not be held
    pub fn excluding<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.require_none = lowercase_all(keys);
        self
    }

    /// Add a custom predicate
    pub fn with_check<F>(mut self, check: F) -> Self
    where
        F: Fn(&InputState, &C) -> bool + 'static,
    {
        self.custom_check = Some(Box::new(check));
        self
    }

    /// Evaluate the condition against this frame's input
    pub fn is_met(&self, state: &InputState, context: &C) -> bool {
        if let Some(check) = &self.custom_check {
            if !check(state, context) {
                return false;
            }
        }

        if self.require_none.iter().any(|key| state.is_pressed(key)) {
            return false;
        }

        // An empty key list imposes no key requirement at all
        if self.keys.is_empty() {
            return true;
        }

        if self.require_all {
            self.keys.iter().all(|key| state.is_pressed(key))
        } else {
            self.keys.iter().any(|key| state.is_pressed(key))
        }
    }
}

impl<C> fmt::Debug for ActionCondition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCondition")
            .field("keys", &self.keys)
            .field("require_all", &self.require_all)
            .field("require_none", &self.require_none)
            .field("custom_check", &self.custom_check.is_some())
            .finish()
    }
}

/// A named, prioritized rule mapping an input condition to callbacks
pub struct PlayerAction<C> {
    pub name: String,
    /// Higher priority is evaluated first
    pub priority: i32,
    pub condition: ActionCondition<C>,
    pub on_press: Option<ActionCallback<C>>,
    pub on_hold: Option<ActionCallback<C>>,
    pub on_release: Option<ActionCallback<C>>,
    /// When matched, lower-priority blocking actions are skipped this frame
    pub blocks_other_actions: bool,
}

impl<C> PlayerAction<C> {
    /// Create a blocking action with no callbacks
    pub fn new(name: &str, priority: i32, condition: ActionCondition<C>) -> Self {
        Self {
            name: name.to_string(),
            priority,
            condition,
            on_press: None,
            on_hold: None,
            on_release: None,
            blocks_other_actions: true,
        }
    }

    pub fn on_press<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut C, &InputState) + 'static,
    {
        self.on_press = Some(Box::new(callback));
        self
    }

    pub fn on_hold<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut C, &InputState) + 'static,
    {
        self.on_hold = Some(Box::new(callback));
        self
    }

    /// None of the player bindings react to releases yet
    #[allow(dead_code)]
    pub fn on_release<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut C, &InputState) + 'static,
    {
        self.on_release = Some(Box::new(callback));
        self
    }

    /// Let lower-priority actions keep running when this one matches
    pub fn non_blocking(mut self) -> Self {
        self.blocks_other_actions = false;
        self
    }
}

impl<C> fmt::Debug for PlayerAction<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerAction")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("condition", &self.condition)
            .field("blocks_other_actions", &self.blocks_other_actions)
            .finish_non_exhaustive()
    }
}

/// Evaluates registered actions in priority order once per frame.
///
/// `C` is whatever the callbacks drive (usually the player).
pub struct ActionSystem<C> {
    actions: Vec<PlayerAction<C>>,
    /// Names of the actions that matched during the previous frame
    active: HashSet<String>,
}

impl<C> ActionSystem<C> {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            active: HashSet::new(),
        }
    }

    /// Register an action and keep the list sorted by descending priority.
    /// Equal priorities keep their registration order.
    pub fn register_action(&mut self, action: PlayerAction<C>) -> Result<(), InputError> {
        if self.actions.iter().any(|a| a.name == action.name) {
            return Err(InputError::DuplicateAction(action.name));
        }

        log::debug!(
            "Registered action '{}' (priority {}, blocking: {})",
            action.name,
            action.priority,
            action.blocks_other_actions
        );
        self.actions.push(action);
        // sort_by is stable
        self.actions.sort_by(|a, b| b.priority.cmp(&a.priority));
        Ok(())
    }

    /// Evaluate every action against this frame's input and fire callbacks
    pub fn process_input(&mut self, state: &InputState, context: &mut C) {
        let mut blocked = false;
        let mut current = HashSet::with_capacity(self.actions.len());

        for action in &mut self.actions {
            if blocked && action.blocks_other_actions {
                continue;
            }

            let was_active = self.active.contains(&action.name);

            if action.condition.is_met(state, context) {
                current.insert(action.name.clone());

                if !was_active {
                    if let Some(on_press) = action.on_press.as_mut() {
                        on_press(context, state);
                    }
                }

                if let Some(on_hold) = action.on_hold.as_mut() {
                    on_hold(context, state);
                }

                if action.blocks_other_actions {
                    blocked = true;
                }
            } else if was_active {
                if let Some(on_release) = action.on_release.as_mut() {
                    on_release(context, state);
                }
            }
        }

        self.active = current;
    }

    /// Forget which actions were active (next match fires `on_press` again)
    pub fn reset(&mut self) {
        self.active.clear();
    }

    /// Names of the actions that matched during the last processed frame
    pub fn active_actions(&self) -> Vec<String> {
        self.active.iter().cloned().collect()
    }

    /// Registered action names in evaluation order
    pub fn action_names(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.name.as_str()).collect()
    }
}

impl<C> Default for ActionSystem<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for ActionSystem<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSystem")
            .field("actions", &self.actions)
            .field("active", &self.active)
            .finish()
    }
}

fn lowercase_all<I, S>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keys.into_iter().map(|k| k.as_ref().to_lowercase()).collect()
}
