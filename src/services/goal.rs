//! Savings goal service
//!
//! Business logic for savings goals including CRUD operations and lookup
//! by ID or name.

use crate::audit::EntityType;
use crate::error::{SaverError, SaverResult};
use crate::models::{GoalId, Money, SavingsGoal, Timestamp};
use crate::storage::Storage;

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

/// Input for creating a goal
#[derive(Debug, Clone)]
pub struct CreateGoalInput {
    pub name: String,
    pub target_amount: Money,
    pub current_amount: Option<Money>,
    pub deadline: Option<Timestamp>,
    pub note: Option<String>,
}

/// Changes to apply to a goal; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct UpdateGoalInput {
    pub name: Option<String>,
    pub target_amount: Option<Money>,
    pub current_amount: Option<Money>,
    pub deadline: Option<Option<Timestamp>>,
    /// An empty note clears it
    pub note: Option<String>,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn ensure_unique_name(&self, name: &str, except: Option<GoalId>) -> SaverResult<()> {
        if let Some(existing) = self.storage.goals.get_by_name(name)? {
            if Some(existing.id) != except {
                return Err(SaverError::Validation(format!(
                    "A savings goal named '{}' already exists",
                    existing.name
                )));
            }
        }
        Ok(())
    }

    /// Create a new savings goal
    pub fn create(&self, input: CreateGoalInput) -> SaverResult<SavingsGoal> {
        let name = input.name.trim().to_string();
        self.ensure_unique_name(&name, None)?;

        let mut goal = SavingsGoal::new(GoalId::new(0), name, input.target_amount);
        goal.current_amount = input.current_amount.unwrap_or_default();
        goal.deadline = input.deadline;
        goal.note = input
            .note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        goal.validate()
            .map_err(|e| SaverError::Validation(e.to_string()))?;

        goal.id = self.storage.goals.allocate_id()?;
        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_create(
            EntityType::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    pub fn get(&self, id: GoalId) -> SaverResult<Option<SavingsGoal>> {
        self.storage.goals.get(id)
    }

    /// Find a goal by ID ("3", "goal-3") or by name
    pub fn find(&self, identifier: &str) -> SaverResult<SavingsGoal> {
        if let Ok(id) = identifier.parse::<GoalId>() {
            if let Some(goal) = self.get(id)? {
                return Ok(goal);
            }
        }

        self.storage
            .goals
            .get_by_name(identifier)?
            .ok_or_else(|| SaverError::goal_not_found(identifier))
    }

    /// All goals in creation order
    pub fn list(&self) -> SaverResult<Vec<SavingsGoal>> {
        self.storage.goals.get_all()
    }

    /// Apply changes to a goal
    pub fn update(&self, id: GoalId, input: UpdateGoalInput) -> SaverResult<SavingsGoal> {
        let before = self
            .get(id)?
            .ok_or_else(|| SaverError::goal_not_found(id.to_string()))?;
        let mut goal = before.clone();

        if let Some(name) = input.name {
            let name = name.trim().to_string();
            self.ensure_unique_name(&name, Some(id))?;
            goal.name = name;
        }
        if let Some(target) = input.target_amount {
            goal.target_amount = target;
        }
        if let Some(current) = input.current_amount {
            goal.current_amount = current;
        }
        if let Some(deadline) = input.deadline {
            goal.deadline = deadline;
        }
        if let Some(note) = input.note {
            let note = note.trim().to_string();
            goal.note = if note.is_empty() { None } else { Some(note) };
        }

        goal.validate()
            .map_err(|e| SaverError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_update(
            EntityType::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &before,
            &goal,
            None,
        )?;

        Ok(goal)
    }

    /// Delete a goal
    pub fn delete(&self, id: GoalId) -> SaverResult<SavingsGoal> {
        let goal = self
            .storage
            .goals
            .delete(id)?
            .ok_or_else(|| SaverError::goal_not_found(id.to_string()))?;
        self.storage.goals.save()?;

        self.storage.log_delete(
            EntityType::SavingsGoal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SaverPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaverPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(name: &str, target: i64) -> CreateGoalInput {
        CreateGoalInput {
            name: name.to_string(),
            target_amount: Money::from_cents(target),
            current_amount: None,
            deadline: None,
            note: None,
        }
    }

    #[test]
    fn test_create_and_find() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        let goal = service.create(input(" Laptop ", 100000)).unwrap();
        assert_eq!(goal.id, GoalId::new(1));
        assert_eq!(goal.name, "Laptop");
        assert_eq!(goal.current_amount, Money::zero());

        assert_eq!(service.find("goal-1").unwrap(), goal);
        assert_eq!(service.find("laptop").unwrap(), goal);
        assert!(service.find("Car").unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        assert!(service.create(input("", 100)).unwrap_err().is_validation());
        assert!(service.create(input("Trip", 0)).unwrap_err().is_validation());

        service.create(input("Trip", 100)).unwrap();
        assert!(service.create(input("trip", 100)).unwrap_err().is_validation());

        // Failed creates do not consume IDs
        assert_eq!(service.create(input("Car", 100)).unwrap().id, GoalId::new(2));
    }

    #[test]
    fn test_update_progress() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let goal = service.create(input("Laptop", 100000)).unwrap();

        let updated = service
            .update(
                goal.id,
                UpdateGoalInput {
                    current_amount: Some(Money::from_cents(100000)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(updated.is_complete());

        let err = service
            .update(
                goal.id,
                UpdateGoalInput {
                    current_amount: Some(Money::from_cents(-1)),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let goal = service.create(input("Laptop", 100)).unwrap();

        service.delete(goal.id).unwrap();
        assert!(service.list().unwrap().is_empty());
        assert!(service.delete(goal.id).unwrap_err().is_not_found());
        assert_eq!(storage.audit().entry_count().unwrap(), 2);
    }
}
