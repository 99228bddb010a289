//! Task descriptors and priority-table validation
//!
//! The scheduler itself is external; this module only describes the task
//! set and checks, once at startup, that the priority assignment honors
//! the orderings the liveness protocol depends on: the watchdog above
//! everything, the load generator above the control graph, the heartbeat
//! producer below it, and rate-monotonic order inside the control graph.

use crate::config::Timing;

/// The seven tasks of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TaskId {
    Input,
    Control,
    Vehicle,
    Display,
    OverloadDetect,
    Watchdog,
    ExtraLoad,
}

impl TaskId {
    /// True for the tasks forming the Input->Control->Vehicle->Display
    /// data flow.
    pub fn in_control_graph(self) -> bool {
        matches!(
            self,
            TaskId::Input | TaskId::Control | TaskId::Vehicle | TaskId::Display
        )
    }
}

/// Preemption level; higher values preempt lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Priority(pub u8);

/// Static description of one periodic task.
///
/// The deadline is the period. The watchdog is event-driven (it blocks on
/// the token, not on a release), so it carries no period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskDescriptor {
    pub id: TaskId,
    pub period_ms: Option<u32>,
    pub priority: Priority,
}

/// Number of tasks in the system.
pub const TASK_COUNT: usize = 7;

/// The reference task set for a timing configuration.
pub fn task_set(timing: &Timing) -> [TaskDescriptor; TASK_COUNT] {
    [
        TaskDescriptor {
            id: TaskId::Watchdog,
            period_ms: None,
            priority: Priority(10),
        },
        TaskDescriptor {
            id: TaskId::ExtraLoad,
            period_ms: Some(timing.extra_load_period_ms),
            priority: Priority(9),
        },
        TaskDescriptor {
            id: TaskId::Input,
            period_ms: Some(timing.input_period_ms),
            priority: Priority(7),
        },
        TaskDescriptor {
            id: TaskId::Vehicle,
            period_ms: Some(timing.vehicle_period_ms),
            priority: Priority(6),
        },
        TaskDescriptor {
            id: TaskId::Control,
            period_ms: Some(timing.control_period_ms),
            priority: Priority(5),
        },
        TaskDescriptor {
            id: TaskId::Display,
            period_ms: Some(timing.display_period_ms),
            priority: Priority(4),
        },
        TaskDescriptor {
            id: TaskId::OverloadDetect,
            period_ms: Some(timing.heartbeat_period_ms),
            priority: Priority(3),
        },
    ]
}

/// Rejected priority tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScheduleError {
    /// Two tasks share a preemption level
    DuplicatePriority(Priority),
    /// Some task is at or above the watchdog
    WatchdogNotHighest,
    /// The load generator does not preempt the whole control graph
    LoadGeneratorTooLow,
    /// The heartbeat producer is not below the whole control graph
    DetectorNotLowest,
    /// A shorter-period control-graph task sits below a longer-period one
    RateInversion { faster: TaskId, slower: TaskId },
}

fn find(tasks: &[TaskDescriptor], id: TaskId) -> Option<&TaskDescriptor> {
    tasks.iter().find(|task| task.id == id)
}

/// Check a task set against the required priority orderings.
pub fn validate(tasks: &[TaskDescriptor]) -> Result<(), ScheduleError> {
    for (i, a) in tasks.iter().enumerate() {
        for b in &tasks[i + 1..] {
            if a.priority == b.priority {
                return Err(ScheduleError::DuplicatePriority(a.priority));
            }
        }
    }

    if let Some(watchdog) = find(tasks, TaskId::Watchdog) {
        if tasks
            .iter()
            .any(|task| task.id != TaskId::Watchdog && task.priority >= watchdog.priority)
        {
            return Err(ScheduleError::WatchdogNotHighest);
        }
    }

    if let Some(load) = find(tasks, TaskId::ExtraLoad) {
        if tasks
            .iter()
            .any(|task| task.id.in_control_graph() && task.priority >= load.priority)
        {
            return Err(ScheduleError::LoadGeneratorTooLow);
        }
    }

    if let Some(detector) = find(tasks, TaskId::OverloadDetect) {
        if tasks
            .iter()
            .any(|task| task.id.in_control_graph() && task.priority <= detector.priority)
        {
            return Err(ScheduleError::DetectorNotLowest);
        }
    }

    // Rate-monotonic order inside the control graph: shorter period means
    // equal-or-higher priority.
    for a in tasks.iter().filter(|t| t.id.in_control_graph()) {
        for b in tasks.iter().filter(|t| t.id.in_control_graph()) {
            if let (Some(pa), Some(pb)) = (a.period_ms, b.period_ms) {
                if pa < pb && a.priority < b.priority {
                    return Err(ScheduleError::RateInversion {
                        faster: a.id,
                        slower: b.id,
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(tasks: &mut [TaskDescriptor], id: TaskId) -> &mut TaskDescriptor {
        tasks.iter_mut().find(|task| task.id == id).unwrap()
    }

    #[test]
    fn test_reference_task_set_validates() {
        let tasks = task_set(&Timing::default());
        assert_eq!(validate(&tasks), Ok(()));
    }

    #[test]
    fn test_duplicate_priorities_rejected() {
        let mut tasks = task_set(&Timing::default());
        descriptor(&mut tasks, TaskId::Display).priority = Priority(5);
        assert_eq!(
            validate(&tasks),
            Err(ScheduleError::DuplicatePriority(Priority(5)))
        );
    }

    #[test]
    fn test_demoted_watchdog_rejected() {
        let mut tasks = task_set(&Timing::default());
        descriptor(&mut tasks, TaskId::Watchdog).priority = Priority(8);
        assert_eq!(validate(&tasks), Err(ScheduleError::WatchdogNotHighest));
    }

    #[test]
    fn test_load_generator_below_control_graph_rejected() {
        let mut tasks = task_set(&Timing::default());
        descriptor(&mut tasks, TaskId::ExtraLoad).priority = Priority(2);
        assert_eq!(validate(&tasks), Err(ScheduleError::LoadGeneratorTooLow));
    }

    #[test]
    fn test_promoted_detector_rejected() {
        let mut tasks = task_set(&Timing::default());
        descriptor(&mut tasks, TaskId::OverloadDetect).priority = Priority(8);
        assert_eq!(validate(&tasks), Err(ScheduleError::DetectorNotLowest));
    }

    #[test]
    fn test_rate_inversion_in_control_graph_rejected() {
        let mut tasks = task_set(&Timing::default());
        // Swap the 50 ms input task below the 500 ms display task
        descriptor(&mut tasks, TaskId::Input).priority = Priority(4);
        descriptor(&mut tasks, TaskId::Display).priority = Priority(7);
        assert_eq!(
            validate(&tasks),
            Err(ScheduleError::RateInversion {
                faster: TaskId::Input,
                slower: TaskId::Vehicle,
            })
        );
    }
}
