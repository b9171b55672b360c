use crate::domain::assemble::assemble;
use crate::domain::solve::solve;
use crate::domain::validate::normalize;
use crate::models::{OptimizationRequest, OptimizationResponse, RawItem};

/// Find the lightest subset of items reaching `min_value` calories within
/// `max_weight_kg`.
///
/// Never fails: invalid input and infeasible problems come back as a response
/// with `feasible == false` and an explanatory note.
pub fn optimize(request: &OptimizationRequest) -> OptimizationResponse {
    let problem = match normalize(request) {
        Ok(problem) => problem,
        Err(error) => {
            log::debug!("rejected request: {}", error);
            let mut response = OptimizationResponse::new();
            response.notes.push(error.to_string());
            return response;
        }
    };

    let report = solve(&problem);
    assemble(&problem, report)
}

/// Five-item example ready to send to `optimize`.
pub fn sample_request() -> OptimizationRequest {
    OptimizationRequest {
        min_value: 15,
        max_weight_kg: 10.0,
        items: vec![
            RawItem::new("E1", "Elemento 1", 5.0, 3),
            RawItem::new("E2", "Elemento 2", 3.0, 5),
            RawItem::new("E3", "Elemento 3", 5.0, 2),
            RawItem::new("E4", "Elemento 4", 1.0, 8),
            RawItem::new("E5", "Elemento 5", 2.0, 3),
        ],
    }
}
