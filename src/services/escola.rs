use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        escola::{
            Escola, EscolaDetail, EscolaList, EscolaPayload, FotoEscola, FotoEscolaPayload, Sala,
            SalaPayload,
        },
        pagination::Page,
        units,
    },
};

use super::{is_unique_violation, non_blank};

pub struct EscolaService;

impl EscolaService {
    pub async fn list(
        pool: &SqlitePool,
        page: Page,
        municipio: Option<&str>,
    ) -> ApiResult<EscolaList> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM escolas WHERE ($1 IS NULL OR municipio = $1)")
                .bind(municipio)
                .fetch_one(pool)
                .await?;

        let escolas = sqlx::query_as::<_, Escola>(
            "SELECT * FROM escolas WHERE ($1 IS NULL OR municipio = $1)
             ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(municipio)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(EscolaList {
            escolas,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(pool: &SqlitePool, payload: &EscolaPayload) -> ApiResult<Escola> {
        let nome_instituicao = non_blank(&payload.nome_instituicao).ok_or_else(|| {
            ApiError::BadRequest("Nome da instituição é obrigatório".to_string())
        })?;

        let escola = sqlx::query_as::<_, Escola>(
            "INSERT INTO escolas
                 (nome_instituicao, razao_social, cnpj, logradouro, numero, bairro, cep,
                  municipio, uf, diretor_nome, diretor_cpf, diretor_telefone, telefone, email,
                  inscricao_estadual, inscricao_municipal, localizacao_google_maps,
                  codigo_energia, codigo_agua, banco, tipo_conta, numero_agencia,
                  digito_agencia, numero_conta, digito_conta, chave_pix, tipo_custo)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27)
             RETURNING *",
        )
        .bind(nome_instituicao)
        .bind(&payload.razao_social)
        .bind(&payload.cnpj)
        .bind(&payload.logradouro)
        .bind(&payload.numero)
        .bind(&payload.bairro)
        .bind(&payload.cep)
        .bind(&payload.municipio)
        .bind(&payload.uf)
        .bind(&payload.diretor_nome)
        .bind(&payload.diretor_cpf)
        .bind(&payload.diretor_telefone)
        .bind(&payload.telefone)
        .bind(&payload.email)
        .bind(&payload.inscricao_estadual)
        .bind(&payload.inscricao_municipal)
        .bind(&payload.localizacao_google_maps)
        .bind(&payload.codigo_energia)
        .bind(&payload.codigo_agua)
        .bind(&payload.banco)
        .bind(&payload.tipo_conta)
        .bind(&payload.numero_agencia)
        .bind(&payload.digito_agencia)
        .bind(&payload.numero_conta)
        .bind(&payload.digito_conta)
        .bind(&payload.chave_pix)
        .bind(&payload.tipo_custo)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::BadRequest("CNPJ já cadastrado".to_string())
            } else {
                e.into()
            }
        })?;
        Ok(escola)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> ApiResult<Escola> {
        sqlx::query_as::<_, Escola>("SELECT * FROM escolas WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Escola não encontrada".to_string()))
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<EscolaDetail> {
        let escola = Self::find(pool, id).await?;
        let salas = Self::fetch_salas(pool, id).await?;
        let fotos = Self::fetch_fotos(pool, id).await?;
        Ok(EscolaDetail {
            escola,
            salas,
            fotos,
        })
    }

    pub async fn update(pool: &SqlitePool, id: i64, payload: &EscolaPayload) -> ApiResult<Escola> {
        sqlx::query_as::<_, Escola>(
            "UPDATE escolas SET
                 nome_instituicao = COALESCE($1, nome_instituicao),
                 razao_social = COALESCE($2, razao_social),
                 cnpj = COALESCE($3, cnpj),
                 logradouro = COALESCE($4, logradouro),
                 numero = COALESCE($5, numero),
                 bairro = COALESCE($6, bairro),
                 cep = COALESCE($7, cep),
                 municipio = COALESCE($8, municipio),
                 uf = COALESCE($9, uf),
                 diretor_nome = COALESCE($10, diretor_nome),
                 diretor_cpf = COALESCE($11, diretor_cpf),
                 diretor_telefone = COALESCE($12, diretor_telefone),
                 telefone = COALESCE($13, telefone),
                 email = COALESCE($14, email),
                 inscricao_estadual = COALESCE($15, inscricao_estadual),
                 inscricao_municipal = COALESCE($16, inscricao_municipal),
                 localizacao_google_maps = COALESCE($17, localizacao_google_maps),
                 codigo_energia = COALESCE($18, codigo_energia),
                 codigo_agua = COALESCE($19, codigo_agua),
                 banco = COALESCE($20, banco),
                 tipo_conta = COALESCE($21, tipo_conta),
                 numero_agencia = COALESCE($22, numero_agencia),
                 digito_agencia = COALESCE($23, digito_agencia),
                 numero_conta = COALESCE($24, numero_conta),
                 digito_conta = COALESCE($25, digito_conta),
                 chave_pix = COALESCE($26, chave_pix),
                 tipo_custo = COALESCE($27, tipo_custo),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $28
             RETURNING *",
        )
        .bind(non_blank(&payload.nome_instituicao))
        .bind(&payload.razao_social)
        .bind(&payload.cnpj)
        .bind(&payload.logradouro)
        .bind(&payload.numero)
        .bind(&payload.bairro)
        .bind(&payload.cep)
        .bind(&payload.municipio)
        .bind(&payload.uf)
        .bind(&payload.diretor_nome)
        .bind(&payload.diretor_cpf)
        .bind(&payload.diretor_telefone)
        .bind(&payload.telefone)
        .bind(&payload.email)
        .bind(&payload.inscricao_estadual)
        .bind(&payload.inscricao_municipal)
        .bind(&payload.localizacao_google_maps)
        .bind(&payload.codigo_energia)
        .bind(&payload.codigo_agua)
        .bind(&payload.banco)
        .bind(&payload.tipo_conta)
        .bind(&payload.numero_agencia)
        .bind(&payload.digito_agencia)
        .bind(&payload.numero_conta)
        .bind(&payload.digito_conta)
        .bind(&payload.chave_pix)
        .bind(&payload.tipo_custo)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::BadRequest("CNPJ já cadastrado".to_string())
            } else {
                ApiError::from(e)
            }
        })?
        .ok_or_else(|| ApiError::NotFound("Escola não encontrada".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM escolas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Escola não encontrada".to_string()));
        }
        Ok(())
    }

    // Salas

    pub async fn listar_salas(pool: &SqlitePool, escola_id: i64) -> ApiResult<Vec<Sala>> {
        Self::find(pool, escola_id).await?;
        Self::fetch_salas(pool, escola_id).await
    }

    pub async fn create_sala(
        pool: &SqlitePool,
        escola_id: i64,
        payload: &SalaPayload,
    ) -> ApiResult<Sala> {
        Self::find(pool, escola_id).await?;
        let nome = non_blank(&payload.nome)
            .ok_or_else(|| ApiError::BadRequest("Nome da sala é obrigatório".to_string()))?;

        let sala = sqlx::query_as::<_, Sala>(
            "INSERT INTO salas
                 (escola_id, bloco, andar, nome, capacidade, largura_cm, comprimento_cm,
                  mobiliario)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(escola_id)
        .bind(&payload.bloco)
        .bind(&payload.andar)
        .bind(nome)
        .bind(payload.capacidade)
        .bind(payload.largura.map(units::to_centimetros))
        .bind(payload.comprimento.map(units::to_centimetros))
        .bind(&payload.mobiliario)
        .fetch_one(pool)
        .await?;
        Ok(sala)
    }

    pub async fn update_sala(pool: &SqlitePool, id: i64, payload: &SalaPayload) -> ApiResult<Sala> {
        sqlx::query_as::<_, Sala>(
            "UPDATE salas SET
                 bloco = COALESCE($1, bloco),
                 andar = COALESCE($2, andar),
                 nome = COALESCE($3, nome),
                 capacidade = COALESCE($4, capacidade),
                 largura_cm = COALESCE($5, largura_cm),
                 comprimento_cm = COALESCE($6, comprimento_cm),
                 mobiliario = COALESCE($7, mobiliario),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $8
             RETURNING *",
        )
        .bind(&payload.bloco)
        .bind(&payload.andar)
        .bind(non_blank(&payload.nome))
        .bind(payload.capacidade)
        .bind(payload.largura.map(units::to_centimetros))
        .bind(payload.comprimento.map(units::to_centimetros))
        .bind(&payload.mobiliario)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Sala não encontrada".to_string()))
    }

    pub async fn delete_sala(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM salas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Sala não encontrada".to_string()));
        }
        Ok(())
    }

    // Fotos

    pub async fn listar_fotos(pool: &SqlitePool, escola_id: i64) -> ApiResult<Vec<FotoEscola>> {
        Self::find(pool, escola_id).await?;
        Self::fetch_fotos(pool, escola_id).await
    }

    pub async fn create_foto(
        pool: &SqlitePool,
        escola_id: i64,
        payload: &FotoEscolaPayload,
    ) -> ApiResult<FotoEscola> {
        Self::find(pool, escola_id).await?;
        let (Some(categoria), Some(nome_arquivo), Some(caminho_arquivo)) = (
            non_blank(&payload.categoria),
            non_blank(&payload.nome_arquivo),
            non_blank(&payload.caminho_arquivo),
        ) else {
            return Err(ApiError::BadRequest(
                "Categoria, nome e caminho do arquivo são obrigatórios".to_string(),
            ));
        };

        let foto = sqlx::query_as::<_, FotoEscola>(
            "INSERT INTO fotos_escola (escola_id, categoria, nome_arquivo, caminho_arquivo,
                                       descricao)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(escola_id)
        .bind(categoria)
        .bind(nome_arquivo)
        .bind(caminho_arquivo)
        .bind(&payload.descricao)
        .fetch_one(pool)
        .await?;
        Ok(foto)
    }

    pub async fn delete_foto(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM fotos_escola WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Foto não encontrada".to_string()));
        }
        Ok(())
    }

    async fn fetch_salas(pool: &SqlitePool, escola_id: i64) -> ApiResult<Vec<Sala>> {
        let salas =
            sqlx::query_as::<_, Sala>("SELECT * FROM salas WHERE escola_id = $1 ORDER BY id")
                .bind(escola_id)
                .fetch_all(pool)
                .await?;
        Ok(salas)
    }

    async fn fetch_fotos(pool: &SqlitePool, escola_id: i64) -> ApiResult<Vec<FotoEscola>> {
        let fotos = sqlx::query_as::<_, FotoEscola>(
            "SELECT * FROM fotos_escola WHERE escola_id = $1 ORDER BY id",
        )
        .bind(escola_id)
        .fetch_all(pool)
        .await?;
        Ok(fotos)
    }
}
