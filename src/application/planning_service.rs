// Planning service: one task owns the planner, commands are applied in arrival order.
use crate::common::{ApplicationError, ApplicationResult, DomainResult};
use crate::domains::path_planning::{
    BuildReport, Endpoint, Path, PlannerMetrics, PrmPlanner, QueryOutcome, RoadmapSnapshot,
};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

enum PlannerCommand {
    Plan {
        start: Endpoint,
        goal: Endpoint,
        reply: oneshot::Sender<DomainResult<QueryOutcome>>,
    },
    Rebuild {
        reply: oneshot::Sender<DomainResult<BuildReport>>,
    },
    Graphs {
        reply: oneshot::Sender<Vec<RoadmapSnapshot>>,
    },
    Metrics {
        reply: oneshot::Sender<PlannerMetrics>,
    },
}

/// Cloneable handle to a planner running on its own task. The roadmap is
/// only ever touched by that task, so concurrent callers never observe each
/// other's transient query nodes.
#[derive(Clone)]
pub struct PlanningService {
    command_sender: mpsc::Sender<PlannerCommand>,
}

impl PlanningService {
    /// Moves `planner` onto a new tokio task. `capacity` bounds queued commands.
    pub fn spawn(planner: PrmPlanner, capacity: usize) -> Self {
        let (command_sender, command_receiver) = mpsc::channel(capacity.max(1));
        tokio::spawn(run(planner, command_receiver));
        Self { command_sender }
    }

    pub async fn plan(
        &self,
        start: impl Into<Endpoint>,
        goal: impl Into<Endpoint>,
    ) -> ApplicationResult<Path> {
        Ok(self.plan_with_outcome(start, goal).await?.path)
    }

    pub async fn plan_with_outcome(
        &self,
        start: impl Into<Endpoint>,
        goal: impl Into<Endpoint>,
    ) -> ApplicationResult<QueryOutcome> {
        let (reply, response) = oneshot::channel();
        self.send(PlannerCommand::Plan {
            start: start.into(),
            goal: goal.into(),
            reply,
        })
        .await?;
        Ok(receive(response).await??)
    }

    pub async fn rebuild(&self) -> ApplicationResult<BuildReport> {
        let (reply, response) = oneshot::channel();
        self.send(PlannerCommand::Rebuild { reply }).await?;
        Ok(receive(response).await??)
    }

    pub async fn graphs(&self) -> ApplicationResult<Vec<RoadmapSnapshot>> {
        let (reply, response) = oneshot::channel();
        self.send(PlannerCommand::Graphs { reply }).await?;
        receive(response).await
    }

    pub async fn metrics(&self) -> ApplicationResult<PlannerMetrics> {
        let (reply, response) = oneshot::channel();
        self.send(PlannerCommand::Metrics { reply }).await?;
        receive(response).await
    }

    async fn send(&self, command: PlannerCommand) -> ApplicationResult<()> {
        self.command_sender
            .send(command)
            .await
            .map_err(|e| {
                ApplicationError::ServiceUnavailable(format!("Failed to send command: {}", e))
            })
    }
}

async fn receive<T>(response: oneshot::Receiver<T>) -> ApplicationResult<T> {
    response.await.map_err(|e| {
        ApplicationError::ServiceUnavailable(format!("Planner task dropped reply: {}", e))
    })
}

async fn run(mut planner: PrmPlanner, mut commands: mpsc::Receiver<PlannerCommand>) {
    info!(
        nodes = planner.roadmap().node_count(),
        edges = planner.roadmap().edge_count(),
        "planning service started"
    );
    while let Some(command) = commands.recv().await {
        match command {
            PlannerCommand::Plan { start, goal, reply } => {
                let outcome = planner.plan_with_outcome(start, goal);
                if let Ok(o) = &outcome {
                    debug!(
                        found = o.metrics.path_found,
                        waypoints = o.path.num_poses(),
                        planning_time_us = o.metrics.planning_time.as_micros() as u64,
                        "query answered"
                    );
                }
                let _ = reply.send(outcome);
            }
            PlannerCommand::Rebuild { reply } => {
                let _ = reply.send(planner.reset());
            }
            PlannerCommand::Graphs { reply } => {
                let _ = reply.send(planner.graphs());
            }
            PlannerCommand::Metrics { reply } => {
                let _ = reply.send(planner.metrics());
            }
        }
    }
    info!("planning service stopped");
}
