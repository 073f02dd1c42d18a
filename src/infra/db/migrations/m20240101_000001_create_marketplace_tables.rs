//! Migration: Create the marketplace tables.
//!
//! Foreign ids are plain integer columns; existence is checked by the
//! services before every write.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(primary_key(Usuarios::Idusuarios))
                    .col(
                        ColumnDef::new(Usuarios::EmailUser)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Usuarios::PasswordUser).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Usuarios::EstadoUser)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TipoUsuario::Table)
                    .if_not_exists()
                    .col(primary_key(TipoUsuario::Idtipousuario))
                    .col(
                        ColumnDef::new(TipoUsuario::NombreTipoUsuario)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TipoUsuario::EstadoTipoUsuario)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(primary_key(Roles::Idroles))
                    .col(ColumnDef::new(Roles::Creado).timestamp().not_null())
                    .col(ColumnDef::new(Roles::Modificado).timestamp().not_null())
                    .col(ColumnDef::new(Roles::Idusuarios).integer().not_null())
                    .col(ColumnDef::new(Roles::Idtipousuario).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TipoDocumento::Table)
                    .if_not_exists()
                    .col(primary_key(TipoDocumento::Idtipodocumento))
                    .col(
                        ColumnDef::new(TipoDocumento::NombreTipoDocumento)
                            .string_len(100)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DatosPersonales::Table)
                    .if_not_exists()
                    .col(primary_key(DatosPersonales::Iddatospersonales))
                    .col(
                        ColumnDef::new(DatosPersonales::NombreCompleto)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DatosPersonales::Cedula)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(DatosPersonales::Direccion)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DatosPersonales::Telefono).string_len(15).not_null())
                    .col(ColumnDef::new(DatosPersonales::Imagen).blob().null())
                    .col(
                        ColumnDef::new(DatosPersonales::Idusuarios)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(DatosPersonales::Idtipodocumento)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Regiones::Table)
                    .if_not_exists()
                    .col(primary_key(Regiones::Idregiones))
                    .col(ColumnDef::new(Regiones::NombreRegion).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Emprendimiento::Table)
                    .if_not_exists()
                    .col(primary_key(Emprendimiento::Idemprendimiento))
                    .col(ColumnDef::new(Emprendimiento::Nombre).string_len(100).not_null())
                    .col(ColumnDef::new(Emprendimiento::Descripcion).text().not_null())
                    .col(ColumnDef::new(Emprendimiento::Tipo).string_len(255).not_null())
                    .col(ColumnDef::new(Emprendimiento::FechaCreacion).date().null())
                    .col(
                        ColumnDef::new(Emprendimiento::EstadoEmprendimiento)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Emprendimiento::ImagenEmprendimiento).blob().null())
                    .col(ColumnDef::new(Emprendimiento::Idregiones).integer().not_null())
                    .col(ColumnDef::new(Emprendimiento::Idusuarios).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_emprendimiento_idusuarios")
                    .table(Emprendimiento::Table)
                    .col(Emprendimiento::Idusuarios)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HistorialEmprendimiento::Table)
                    .if_not_exists()
                    .col(primary_key(HistorialEmprendimiento::Idhistorialemprendimiento))
                    .col(
                        ColumnDef::new(HistorialEmprendimiento::Pais)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HistorialEmprendimiento::CantidadEmprendimiento)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HistorialEmprendimiento::Year)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HistorialEmprendimiento::Idemprendimiento)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HistorialEmprendimiento::CantidadAportada)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(HistorialEmprendimiento::Fecha).timestamp().null())
                    .col(
                        ColumnDef::new(HistorialEmprendimiento::Paso)
                            .string_len(255)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProduccionConsumoEnergia::Table)
                    .if_not_exists()
                    .col(primary_key(ProduccionConsumoEnergia::Idproduccionconsumoenergia))
                    .col(
                        ColumnDef::new(ProduccionConsumoEnergia::Idemprendimiento)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProduccionConsumoEnergia::Fecha).date().null())
                    .col(
                        ColumnDef::new(ProduccionConsumoEnergia::ProduccionEnergia)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProduccionConsumoEnergia::ConsumoEnergia)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProduccionConsumoEnergia::FuenteEnergia)
                            .string_len(100)
                            .null(),
                    )
                    .col(ColumnDef::new(ProduccionConsumoEnergia::Observaciones).text().null())
                    .col(ColumnDef::new(ProduccionConsumoEnergia::Idusuarios).integer().null())
                    .col(
                        ColumnDef::new(ProduccionConsumoEnergia::FechaRegistro)
                            .timestamp()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_produccionconsumoenergia_idemprendimiento")
                    .table(ProduccionConsumoEnergia::Table)
                    .col(ProduccionConsumoEnergia::Idemprendimiento)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ComentariosYCalificaciones::Table)
                    .if_not_exists()
                    .col(primary_key(
                        ComentariosYCalificaciones::Idcomentariosycalificaciones,
                    ))
                    .col(
                        ColumnDef::new(ComentariosYCalificaciones::Comentario)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ComentariosYCalificaciones::FechaRegistro)
                            .timestamp()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ComentariosYCalificaciones::FechaComentario)
                            .timestamp()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ComentariosYCalificaciones::Calificacion)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ComentariosYCalificaciones::Idemprendimiento)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ComentariosYCalificaciones::Idusuarios)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ComentariosYCalificaciones::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProduccionConsumoEnergia::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HistorialEmprendimiento::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Emprendimiento::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Regiones::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DatosPersonales::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TipoDocumento::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TipoUsuario::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await
    }
}

fn primary_key<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[derive(Iden)]
enum Usuarios {
    Table,
    Idusuarios,
    EmailUser,
    PasswordUser,
    EstadoUser,
}

#[derive(Iden)]
enum TipoUsuario {
    #[iden = "tipousuario"]
    Table,
    Idtipousuario,
    NombreTipoUsuario,
    EstadoTipoUsuario,
}

#[derive(Iden)]
enum Roles {
    Table,
    Idroles,
    Creado,
    Modificado,
    Idusuarios,
    Idtipousuario,
}

#[derive(Iden)]
enum TipoDocumento {
    #[iden = "tipodocumento"]
    Table,
    Idtipodocumento,
    NombreTipoDocumento,
}

#[derive(Iden)]
enum DatosPersonales {
    #[iden = "datospersonales"]
    Table,
    Iddatospersonales,
    NombreCompleto,
    Cedula,
    Direccion,
    Telefono,
    Imagen,
    Idusuarios,
    Idtipodocumento,
}

#[derive(Iden)]
enum Regiones {
    Table,
    Idregiones,
    NombreRegion,
}

#[derive(Iden)]
enum Emprendimiento {
    Table,
    Idemprendimiento,
    Nombre,
    Descripcion,
    Tipo,
    FechaCreacion,
    EstadoEmprendimiento,
    ImagenEmprendimiento,
    Idregiones,
    Idusuarios,
}

#[derive(Iden)]
enum HistorialEmprendimiento {
    #[iden = "historialemprendimiento"]
    Table,
    Idhistorialemprendimiento,
    Pais,
    CantidadEmprendimiento,
    Year,
    Idemprendimiento,
    CantidadAportada,
    Fecha,
    Paso,
}

#[derive(Iden)]
enum ProduccionConsumoEnergia {
    #[iden = "produccionconsumoenergia"]
    Table,
    Idproduccionconsumoenergia,
    Idemprendimiento,
    Fecha,
    ProduccionEnergia,
    ConsumoEnergia,
    FuenteEnergia,
    Observaciones,
    Idusuarios,
    FechaRegistro,
}

#[derive(Iden)]
enum ComentariosYCalificaciones {
    #[iden = "comentariosycalificaciones"]
    Table,
    Idcomentariosycalificaciones,
    Comentario,
    FechaRegistro,
    FechaComentario,
    Calificacion,
    Idemprendimiento,
    Idusuarios,
}
