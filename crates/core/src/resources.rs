//! Descriptors for every resource served by the API.
//!
//! Client messages are French except for quiz saves, which have always
//! answered in English.

use crate::resource::{
    Column, ColumnKind, Filter, KeyLookup, Messages, RequiredField, Requirement,
    ResourceDescriptor, StoreMessages,
};

const fn int(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::Integer,
    }
}

const fn text(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::Text,
    }
}

const fn boolean(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::Boolean,
    }
}

const fn non_blank(name: &'static str) -> RequiredField {
    RequiredField {
        name,
        requirement: Requirement::NonBlank,
    }
}

const fn truthy(name: &'static str) -> RequiredField {
    RequiredField {
        name,
        requirement: Requirement::Truthy,
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

pub static USERS: ResourceDescriptor = ResourceDescriptor {
    entity: "User",
    table: "users",
    columns: &[
        int("id"),
        text("username"),
        text("password"),
        text("password_kids"),
        text("email"),
    ],
    required: &[
        non_blank("username"),
        non_blank("password"),
        non_blank("password_kids"),
        non_blank("email"),
    ],
    lookup: None,
    filters: &[],
    messages: Messages {
        invalid_id: "ID utilisateur invalide.",
        not_found: "Utilisateur introuvable.",
        list_failed: "Impossible de récupérer les utilisateurs.",
        get_failed: "Impossible de récupérer l'utilisateur.",
        create_failed: "Impossible de créer l'utilisateur.",
        update_failed: "Impossible de mettre à jour l'utilisateur.",
        delete_failed: "Impossible de supprimer l'utilisateur.",
        created: "Utilisateur créé avec succès.",
        updated: "Utilisateur mis à jour avec succès.",
        deleted: "Utilisateur supprimé avec succès.",
        create_rejected: "Échec de la création de l'utilisateur.",
        update_rejected: "Échec de la mise à jour de l'utilisateur.",
        delete_rejected: "Échec de la suppression de l'utilisateur.",
    },
    store_messages: StoreMessages {
        list: "Erreur lors de la récupération des utilisateurs",
        get: "Erreur lors de la récupération de l'utilisateur",
        create: "Erreur lors de la création de l'utilisateur",
        update: "Erreur lors de la mise à jour de l'utilisateur",
        delete: "Erreur lors de la suppression de l'utilisateur",
    },
};

// ---------------------------------------------------------------------------
// Quizzes
// ---------------------------------------------------------------------------

pub static QUIZZES: ResourceDescriptor = ResourceDescriptor {
    entity: "Quizz",
    table: "quizz",
    columns: &[
        int("id"),
        text("title"),
        text("description"),
        int("id_user"),
        int("id_departement"),
    ],
    required: &[],
    lookup: None,
    filters: &[
        Filter {
            segment: "user",
            column: "id_user",
            invalid_id: "ID utilisateur invalide.",
            failed: "Impossible de récupérer les quizz de l'utilisateur.",
            store_failed: "Erreur lors de la récupération des quizz de l'utilisateur",
        },
        Filter {
            segment: "departement",
            column: "id_departement",
            invalid_id: "ID département invalide.",
            failed: "Impossible de récupérer les quizz du département.",
            store_failed: "Erreur lors de la récupération des quizz du département",
        },
    ],
    messages: Messages {
        invalid_id: "ID de quizz invalide.",
        not_found: "Quizz introuvable.",
        list_failed: "Impossible de récupérer les quizz.",
        get_failed: "Impossible de récupérer le quizz.",
        create_failed: "Impossible de créer le quizz.",
        update_failed: "Impossible de mettre à jour le quizz.",
        delete_failed: "Impossible de supprimer le quizz.",
        created: "Quizz créé avec succès.",
        updated: "Quizz mis à jour avec succès.",
        deleted: "Quizz supprimé avec succès.",
        create_rejected: "Échec de la création du quizz.",
        update_rejected: "Échec de la mise à jour du quizz.",
        delete_rejected: "Échec de la suppression du quizz.",
    },
    store_messages: StoreMessages {
        list: "Erreur lors de la récupération des quizz",
        get: "Erreur lors de la récupération du quizz",
        create: "Erreur lors de la création du quizz",
        update: "Erreur lors de la mise à jour du quizz",
        delete: "Erreur lors de la suppression du quizz",
    },
};

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

pub static QUESTIONS: ResourceDescriptor = ResourceDescriptor {
    entity: "Question",
    table: "questions",
    columns: &[int("id"), text("question"), int("id_quizz")],
    required: &[],
    lookup: None,
    filters: &[Filter {
        segment: "quizz",
        column: "id_quizz",
        invalid_id: "ID quizz invalide.",
        failed: "Impossible de récupérer les questions.",
        store_failed: "Erreur lors de la récupération des questions du quizz",
    }],
    messages: Messages {
        invalid_id: "ID question invalide.",
        not_found: "Question introuvable.",
        list_failed: "Impossible de récupérer les questions.",
        get_failed: "Impossible de récupérer la question.",
        create_failed: "Impossible de créer la question.",
        update_failed: "Impossible de mettre à jour la question.",
        delete_failed: "Impossible de supprimer la question.",
        created: "Question créé avec succès.",
        updated: "Question mis à jour avec succès.",
        deleted: "Question supprimé avec succès.",
        create_rejected: "Échec de la création de la question.",
        update_rejected: "Échec de la mise à jour de la question.",
        delete_rejected: "Échec de la suppression de la question.",
    },
    store_messages: StoreMessages {
        list: "Erreur lors de la récupération des questions",
        get: "Erreur lors de la récupération de la question",
        create: "Erreur lors de la création de la question",
        update: "Erreur lors de la mise à jour de la question",
        delete: "Erreur lors de la suppression de la question",
    },
};

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

pub static ANSWERS: ResourceDescriptor = ResourceDescriptor {
    entity: "Answer",
    table: "answers",
    columns: &[
        int("id"),
        text("answer"),
        boolean("is_correct"),
        int("id_quizz"),
        int("id_question"),
    ],
    required: &[],
    lookup: None,
    filters: &[
        Filter {
            segment: "quizz",
            column: "id_quizz",
            invalid_id: "ID quizz invalide.",
            failed: "Impossible de récupérer les réponses.",
            store_failed: "Erreur lors de la récupération des réponses du quizz",
        },
        Filter {
            segment: "question",
            column: "id_question",
            invalid_id: "ID question invalide.",
            failed: "Impossible de récupérer les réponses.",
            store_failed: "Erreur lors de la récupération des réponses de la question",
        },
    ],
    messages: Messages {
        invalid_id: "ID réponse invalide.",
        not_found: "Réponse introuvable.",
        list_failed: "Impossible de récupérer les réponses.",
        get_failed: "Impossible de récupérer la réponse.",
        create_failed: "Impossible de créer la réponse.",
        update_failed: "Impossible de mettre à jour la réponse.",
        delete_failed: "Impossible de supprimer la réponse.",
        created: "Réponse créé avec succès.",
        updated: "Réponse mis à jour avec succès.",
        deleted: "Réponse supprimé avec succès.",
        create_rejected: "Échec de la création de la réponse.",
        update_rejected: "Échec de la mise à jour de la réponse.",
        delete_rejected: "Échec de la suppression de la réponse.",
    },
    store_messages: StoreMessages {
        list: "Erreur lors de la récupération des réponses",
        get: "Erreur lors de la récupération de la réponse",
        create: "Erreur lors de la création de la réponse",
        update: "Erreur lors de la mise à jour de la réponse",
        delete: "Erreur lors de la suppression de la réponse",
    },
};

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

pub static CHARACTERS: ResourceDescriptor = ResourceDescriptor {
    entity: "Character",
    table: "characters",
    columns: &[int("id"), text("name"), text("image_url"), int("id_quiz")],
    required: &[non_blank("name"), non_blank("image_url"), truthy("id_quiz")],
    lookup: None,
    filters: &[],
    messages: Messages {
        invalid_id: "ID personnage invalide.",
        not_found: "Personnage introuvable.",
        list_failed: "Impossible de récupérer les personnages.",
        get_failed: "Impossible de récupérer le personnage.",
        create_failed: "Impossible de créer le personnage.",
        update_failed: "Impossible de mettre à jour le personnage.",
        delete_failed: "Impossible de supprimer le personnage.",
        created: "Personnage créé avec succès.",
        updated: "Personnage mis à jour avec succès.",
        deleted: "Personnage supprimé avec succès.",
        create_rejected: "Échec de la création du personnage.",
        update_rejected: "Échec de la mise à jour du personnage.",
        delete_rejected: "Échec de la suppression du personnage.",
    },
    store_messages: StoreMessages {
        list: "Erreur lors de la récupération des personnages",
        get: "Erreur lors de la récupération du personnage",
        create: "Erreur lors de la création du personnage",
        update: "Erreur lors de la mise à jour du personnage",
        delete: "Erreur lors de la suppression du personnage",
    },
};

// ---------------------------------------------------------------------------
// Organisations
// ---------------------------------------------------------------------------

pub static ORGANISATIONS: ResourceDescriptor = ResourceDescriptor {
    entity: "Organisation",
    table: "organisations",
    columns: &[
        int("id"),
        text("name"),
        text("email"),
        text("phone_number"),
        text("about_us"),
    ],
    required: &[
        non_blank("name"),
        non_blank("email"),
        non_blank("phone_number"),
        non_blank("about_us"),
    ],
    lookup: None,
    filters: &[],
    messages: Messages {
        invalid_id: "ID organisation invalide.",
        not_found: "Organisation introuvable.",
        list_failed: "Impossible de récupérer les organisations.",
        get_failed: "Impossible de récupérer l'organisation.",
        create_failed: "Impossible de créer l'organisation.",
        update_failed: "Impossible de mettre à jour l'organisation.",
        delete_failed: "Impossible de supprimer l'organisation.",
        created: "Organisation créée avec succès.",
        updated: "Organisation mise à jour avec succès.",
        deleted: "Organisation supprimée avec succès.",
        create_rejected: "Échec de la création de l'organisation.",
        update_rejected: "Échec de la mise à jour de l'organisation.",
        delete_rejected: "Échec de la suppression de l'organisation.",
    },
    store_messages: StoreMessages {
        list: "Erreur lors de la récupération des organisations",
        get: "Erreur lors de la récupération de l'organisation",
        create: "Erreur lors de la création de l'organisation",
        update: "Erreur lors de la mise à jour de l'organisation",
        delete: "Erreur lors de la suppression de l'organisation",
    },
};

// ---------------------------------------------------------------------------
// Departements
// ---------------------------------------------------------------------------

pub static DEPARTEMENTS: ResourceDescriptor = ResourceDescriptor {
    entity: "Departement",
    table: "departement",
    columns: &[int("id"), text("name"), text("departement_number")],
    required: &[],
    lookup: Some(KeyLookup {
        segment: "number",
        column: "departement_number",
        invalid_key: "Numéro de département invalide.",
        store_failed: "Erreur lors de la récupération du département par numéro",
    }),
    filters: &[],
    messages: Messages {
        invalid_id: "ID département invalide.",
        not_found: "Département introuvable.",
        list_failed: "Impossible de récupérer les départements.",
        get_failed: "Impossible de récupérer le département.",
        create_failed: "Impossible de créer le département.",
        update_failed: "Impossible de mettre à jour le département.",
        delete_failed: "Impossible de supprimer le département.",
        created: "Département créé avec succès.",
        updated: "Département mis à jour avec succès.",
        deleted: "Département supprimé avec succès.",
        create_rejected: "Échec de la création du département.",
        update_rejected: "Échec de la mise à jour du département.",
        delete_rejected: "Échec de la suppression du département.",
    },
    store_messages: StoreMessages {
        list: "Erreur lors de la récupération des départements",
        get: "Erreur lors de la récupération du département",
        create: "Erreur lors de la création du département",
        update: "Erreur lors de la mise à jour du département",
        delete: "Erreur lors de la suppression du département",
    },
};

// ---------------------------------------------------------------------------
// Quiz saves
// ---------------------------------------------------------------------------

pub static SAVE_QUIZZ: ResourceDescriptor = ResourceDescriptor {
    entity: "SaveQuizz",
    table: "save_quizz",
    columns: &[
        int("id"),
        int("id_user"),
        int("id_quizz"),
        int("id_character"),
        int("id_question"),
    ],
    required: &[truthy("id_user"), truthy("id_quizz"), truthy("id_character")],
    lookup: None,
    filters: &[],
    messages: Messages {
        invalid_id: "Invalid quiz save ID",
        not_found: "Quiz save not found",
        list_failed: "Error while retrieving quiz saves",
        get_failed: "Error while retrieving quiz save",
        create_failed: "Error while creating quiz save",
        update_failed: "Error while updating quiz save",
        delete_failed: "Error while deleting quiz save",
        created: "Quiz save created successfully",
        updated: "Quiz save updated successfully",
        deleted: "Quiz save deleted successfully",
        create_rejected: "Incomplete quiz save data",
        update_rejected: "Quiz save could not be updated",
        delete_rejected: "Quiz save could not be deleted",
    },
    store_messages: StoreMessages {
        list: "Error while retrieving quiz saves",
        get: "Error while retrieving quiz save",
        create: "Error while creating quiz save",
        update: "Error while updating quiz save",
        delete: "Error while deleting quiz save",
    },
};

/// Every descriptor, in route-registration order.
pub static ALL: [&ResourceDescriptor; 8] = [
    &USERS,
    &QUIZZES,
    &QUESTIONS,
    &ANSWERS,
    &CHARACTERS,
    &ORGANISATIONS,
    &DEPARTEMENTS,
    &SAVE_QUIZZ,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_descriptor_selects_id_first() {
        for d in ALL {
            assert_eq!(d.columns[0].name, "id", "{} must select id first", d.entity);
            assert_eq!(d.columns[0].kind, ColumnKind::Integer);
        }
    }

    #[test]
    fn table_names_are_unique() {
        let tables: HashSet<_> = ALL.iter().map(|d| d.table).collect();
        assert_eq!(tables.len(), ALL.len());
    }

    #[test]
    fn required_fields_are_known_columns() {
        for d in ALL {
            for field in d.required {
                assert!(
                    d.column(field.name).is_some(),
                    "{}: required field {} is not a column",
                    d.entity,
                    field.name
                );
            }
        }
    }

    #[test]
    fn filter_and_lookup_columns_exist() {
        for d in ALL {
            for filter in d.filters {
                assert_eq!(
                    d.column(filter.column).map(|c| c.kind),
                    Some(ColumnKind::Integer)
                );
            }
            if let Some(lookup) = d.lookup {
                assert!(d.column(lookup.column).is_some());
            }
        }
    }

    #[test]
    fn required_sets_match_resource_rules() {
        let names = |d: &ResourceDescriptor| d.required.iter().map(|r| r.name).collect::<Vec<_>>();

        assert_eq!(
            names(&USERS),
            ["username", "password", "password_kids", "email"]
        );
        assert_eq!(
            names(&ORGANISATIONS),
            ["name", "email", "phone_number", "about_us"]
        );
        assert_eq!(names(&CHARACTERS), ["name", "image_url", "id_quiz"]);
        assert_eq!(names(&SAVE_QUIZZ), ["id_user", "id_quizz", "id_character"]);
        assert!(QUESTIONS.required.is_empty());
        assert!(ANSWERS.required.is_empty());
        assert!(QUIZZES.required.is_empty());
        assert!(DEPARTEMENTS.required.is_empty());
    }

    #[test]
    fn departement_select_list() {
        assert_eq!(DEPARTEMENTS.select_list(), "id, name, departement_number");
    }

    #[test]
    fn filter_lookup_by_segment() {
        assert_eq!(ANSWERS.filter("question").map(|f| f.column), Some("id_question"));
        assert!(ANSWERS.filter("user").is_none());
    }
}
