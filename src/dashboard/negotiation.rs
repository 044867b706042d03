use once_cell::sync::Lazy;
use serde::Serialize;

/// The fixed negotiation-status card shown on the second dashboard tab.
/// Static reference content with no dynamic inputs; kept here so the view
/// model ships it alongside the derived data.
#[derive(Debug, Serialize)]
pub struct NegotiationCard {
    pub client: &'static str,
    pub fields: Vec<CardField>,
}

#[derive(Debug, Serialize)]
pub struct CardField {
    pub label: &'static str,
    pub value: &'static str,
}

pub static NEGOTIATION_CARD: Lazy<NegotiationCard> = Lazy::new(|| NegotiationCard {
    client: "CIMED",
    fields: vec![
        CardField {
            label: "Apólice",
            value: "9600131570 (Endosso nº 123990)",
        },
        CardField {
            label: "Tipo de Seguro",
            value: "Seguro Empresarial",
        },
        CardField {
            label: "Data de Aviso",
            value: "15/09/2024",
        },
        CardField {
            label: "Matriz de Riscos",
            value: "Link",
        },
        CardField {
            label: "Etapa do processo de apresentação",
            value: "Montando PowerPoint",
        },
        CardField {
            label: "Apresentação",
            value: "Link",
        },
        CardField {
            label: "Contato",
            value: "João Silva - (41) 99999-9999",
        },
        CardField {
            label: "Etapa do processo de negociação",
            value: "Aguardando retorno do cliente",
        },
        CardField {
            label: "Corretora Atual",
            value: "WILLIS CORRETORES DE SEGUROS LTDA",
        },
    ],
});
