//! Prediction projector: one prediction set per stage.
//!
//! All three projections read the same raw pipeline output and produce
//! [`PredTuple`]s comparable against the gold tuples:
//!
//! - **Document retrieval** replaces the retrieved sentences with the gold
//!   evidence of every correctly retrieved document, so only the choice of
//!   documents can cost precision or recall.
//! - **Sentence retrieval** keeps a document only when its retrieved
//!   sentences cover at least one full gold evidence set. A document that
//!   covers none is dropped rather than partially credited.
//! - **Full pipeline** pairs the retrieved sentences with the *predicted*
//!   label. A wrong label files the document under the wrong category.

use crate::error::ScoreError;
use crate::label::Label;
use crate::load::Inputs;
use crate::record::DocId;
use crate::stage::Stage;
use crate::tuple::PredTuple;

/// Project the raw predictions for one stage.
pub fn project(stage: Stage, inputs: &Inputs) -> Result<Vec<PredTuple>, ScoreError> {
    match stage {
        Stage::DocumentRetrieval => document_predictions(inputs),
        Stage::SentenceRetrieval => retrieval_predictions(inputs),
        Stage::FullPipeline => pipeline_predictions(inputs),
    }
}

/// Gold evidence, flattened, for every retrieved document that has gold
/// evidence. Labels come from gold.
pub fn document_predictions(inputs: &Inputs) -> Result<Vec<PredTuple>, ScoreError> {
    let mut preds = Vec::new();
    for retrieval in inputs.retrievals() {
        let claim = inputs.claim(&retrieval.claim_id)?;
        for doc in retrieval.evidence.keys() {
            let Some(sets) = claim.evidence_for(doc) else {
                continue;
            };
            preds.push(PredTuple {
                claim_id: claim.id.clone(),
                doc_id: DocId::parse(&claim.id, doc)?,
                label: claim.label,
                sentences: sets
                    .iter()
                    .flat_map(|set| set.sentences.iter().copied())
                    .collect(),
            });
        }
    }
    Ok(preds)
}

/// Retrieved sentences for every document whose retrieval covers at least
/// one gold evidence set. Labels come from gold.
pub fn retrieval_predictions(inputs: &Inputs) -> Result<Vec<PredTuple>, ScoreError> {
    let mut preds = Vec::new();
    for retrieval in inputs.retrievals() {
        let claim = inputs.claim(&retrieval.claim_id)?;
        for (doc, sentences) in &retrieval.evidence {
            let Some(sets) = claim.evidence_for(doc) else {
                continue;
            };
            let retrieved = sentences.iter().copied().collect();
            if !sets.iter().any(|set| set.is_covered_by(&retrieved)) {
                continue;
            }
            preds.push(PredTuple {
                claim_id: claim.id.clone(),
                doc_id: DocId::parse(&claim.id, doc)?,
                label: claim.label,
                sentences: sentences.clone(),
            });
        }
    }
    Ok(preds)
}

/// Retrieved sentences under the predicted label, for every document not
/// predicted `NOT_ENOUGH_INFO`. The gold dataset is not consulted.
pub fn pipeline_predictions(inputs: &Inputs) -> Result<Vec<PredTuple>, ScoreError> {
    let mut preds = Vec::new();
    for (retrieval, prediction) in inputs.aligned() {
        let claim_id = &prediction.claim_id;
        for (doc, predicted) in &prediction.labels {
            if predicted.label == Label::NotEnoughInfo {
                continue;
            }
            let sentences =
                retrieval
                    .evidence
                    .get(doc)
                    .ok_or_else(|| ScoreError::MissingRetrieval {
                        claim_id: claim_id.clone(),
                        doc_id: doc.clone(),
                    })?;
            preds.push(PredTuple {
                claim_id: claim_id.clone(),
                doc_id: DocId::parse(claim_id, doc)?,
                label: predicted.label,
                sentences: sentences.clone(),
            });
        }
    }
    Ok(preds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Claim, ClaimId, LabelPrediction, SentenceRetrieval};
    use pretty_assertions::assert_eq;

    fn gold() -> Vec<Claim> {
        vec![
            Claim::new(1, Label::Support).with_evidence(3, [vec![1, 2], vec![4]]),
            Claim::new(2, Label::Contradict).with_evidence(7, [vec![0]]),
            Claim::new(3, Label::NotEnoughInfo),
        ]
    }

    fn inputs(retrievals: Vec<SentenceRetrieval>, predictions: Vec<LabelPrediction>) -> Inputs {
        Inputs::new(gold(), retrievals, predictions).unwrap()
    }

    fn pred(claim: i64, doc: i64, label: Label, sentences: Vec<usize>) -> PredTuple {
        PredTuple {
            claim_id: ClaimId::from(claim),
            doc_id: DocId(doc),
            label,
            sentences,
        }
    }

    #[test]
    fn document_projection_substitutes_gold_evidence() {
        let inputs = inputs(
            vec![
                SentenceRetrieval::new(1)
                    .with_document(3, [2, 3])
                    .with_document(11, [0]),
                SentenceRetrieval::new(3).with_document(4, [1]),
            ],
            vec![LabelPrediction::new(1), LabelPrediction::new(3)],
        );

        let preds = document_predictions(&inputs).unwrap();

        assert_eq!(preds, vec![pred(1, 3, Label::Support, vec![1, 2, 4])]);
    }

    #[test]
    fn document_projection_keeps_repeated_sentences() {
        let claims = vec![Claim::new(1, Label::Support).with_evidence(3, [vec![1, 2], vec![2, 5]])];
        let inputs = Inputs::new(
            claims,
            vec![SentenceRetrieval::new(1).with_document(3, [9])],
            vec![LabelPrediction::new(1)],
        )
        .unwrap();

        let preds = document_predictions(&inputs).unwrap();

        assert_eq!(preds[0].sentences, vec![1, 2, 2, 5]);
        assert_eq!(preds[0].weight(), 4);
    }

    #[test]
    fn retrieval_projection_requires_a_covered_set() {
        let inputs = inputs(
            vec![
                SentenceRetrieval::new(1).with_document(3, [1, 2, 6]),
                SentenceRetrieval::new(2).with_document(7, [1, 2]),
            ],
            vec![LabelPrediction::new(1), LabelPrediction::new(2)],
        );

        let preds = retrieval_predictions(&inputs).unwrap();

        assert_eq!(preds, vec![pred(1, 3, Label::Support, vec![1, 2, 6])]);
    }

    #[test]
    fn retrieval_projection_drops_partial_cover() {
        let inputs = inputs(
            vec![SentenceRetrieval::new(1).with_document(3, [2, 3])],
            vec![LabelPrediction::new(1)],
        );

        assert!(retrieval_predictions(&inputs).unwrap().is_empty());
        assert_eq!(
            document_predictions(&inputs).unwrap(),
            vec![pred(1, 3, Label::Support, vec![1, 2, 4])]
        );
    }

    #[test]
    fn any_single_set_is_enough() {
        let inputs = inputs(
            vec![SentenceRetrieval::new(1).with_document(3, [4])],
            vec![LabelPrediction::new(1)],
        );

        assert_eq!(
            retrieval_predictions(&inputs).unwrap(),
            vec![pred(1, 3, Label::Support, vec![4])]
        );
    }

    #[test]
    fn pipeline_projection_uses_predicted_labels() {
        let inputs = inputs(
            vec![
                SentenceRetrieval::new(1)
                    .with_document(3, [1, 2])
                    .with_document(5, [0]),
                SentenceRetrieval::new(2).with_document(7, [0]),
            ],
            vec![
                LabelPrediction::new(1)
                    .with_label(3, Label::Contradict)
                    .with_label(5, Label::NotEnoughInfo),
                LabelPrediction::new(2).with_label(7, Label::Contradict),
            ],
        );

        let preds = pipeline_predictions(&inputs).unwrap();

        assert_eq!(
            preds,
            vec![
                pred(1, 3, Label::Contradict, vec![1, 2]),
                pred(2, 7, Label::Contradict, vec![0]),
            ]
        );
    }

    #[test]
    fn pipeline_projection_needs_retrieved_document() {
        let inputs = inputs(
            vec![SentenceRetrieval::new(1).with_document(3, [1, 2])],
            vec![LabelPrediction::new(1).with_label(9, Label::Support)],
        );

        let error = pipeline_predictions(&inputs).unwrap_err();
        match error {
            ScoreError::MissingRetrieval { claim_id, doc_id } => {
                assert_eq!(claim_id, ClaimId::from(1));
                assert_eq!(doc_id, "9");
            }
            other => panic!("expected missing retrieval, got {other:?}"),
        }
    }

    #[test]
    fn pipeline_projection_ignores_unretrieved_not_enough_info() {
        let inputs = inputs(
            vec![SentenceRetrieval::new(1)],
            vec![LabelPrediction::new(1).with_label(9, Label::NotEnoughInfo)],
        );

        assert!(pipeline_predictions(&inputs).unwrap().is_empty());
    }

    #[test]
    fn unknown_claim_fails_gold_backed_projections() {
        let inputs = inputs(
            vec![SentenceRetrieval::new(42).with_document(3, [1])],
            vec![LabelPrediction::new(42)],
        );

        assert!(matches!(
            document_predictions(&inputs),
            Err(ScoreError::MissingReference { .. })
        ));
        assert!(matches!(
            retrieval_predictions(&inputs),
            Err(ScoreError::MissingReference { .. })
        ));
        assert!(pipeline_predictions(&inputs).unwrap().is_empty());
    }
}
