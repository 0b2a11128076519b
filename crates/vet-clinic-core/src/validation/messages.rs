//! Fixed error messages shown next to form fields (clinic locale: es).

pub const NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const PHONE_REQUIRED: &str = "Por favor ingrese un teléfono";
pub const EMAIL_REQUIRED: &str = "Por favor ingrese un email";
pub const EMAIL_INVALID: &str = "Por favor ingrese un email valido";
pub const ADDRESS_REQUIRED: &str = "Por favor ingrese una dirección";

pub const PRODUCT_NAME_REQUIRED: &str = "Por favor ingrese un nombre del producto.";
pub const PRODUCT_TYPE_REQUIRED: &str = "Por favor ingrese el tipo de producto.";
pub const PRICE_REQUIRED: &str = "Por favor ingrese el precio del producto.";
pub const PRICE_INVALID: &str = "Por favor ingrese un precio valido.";
pub const PRICE_NOT_POSITIVE: &str = "Por favor ingrese un precio mayor a 0.";

pub const PET_NAME_REQUIRED: &str = "Por favor ingrese un nombre para la mascota.";
pub const BREED_REQUIRED: &str = "Por favor ingrese una raza para la mascota.";
pub const BIRTHDAY_REQUIRED: &str = "Por favor ingrese una fecha de nacimiento para la mascota.";
pub const BIRTHDAY_INVALID: &str = "Por favor ingrese una fecha de nacimiento valida.";
pub const CLIENT_REQUIRED: &str = "Por favor seleccione un cliente para la mascota.";
pub const CLIENT_INVALID: &str = "Por favor seleccione un cliente valido.";

pub const PET_REQUIRED: &str = "Por favor seleccione una mascota.";
pub const PET_INVALID: &str = "Por favor seleccione una mascota valida.";
pub const VET_REQUIRED: &str = "Por favor seleccione un veterinario.";
pub const VET_INVALID: &str = "Por favor seleccione un veterinario valido.";
pub const DATE_REQUIRED: &str = "Por favor seleccione una fecha.";
pub const DATE_INVALID: &str = "Por favor ingrese una fecha valida.";
pub const TIME_REQUIRED: &str = "Por favor seleccione una hora.";
pub const TIME_INVALID: &str = "Por favor ingrese una hora valida.";

pub const MEDICINE_NAME_REQUIRED: &str = "Por favor ingrese un nombre del medicamento.";
pub const DESCRIPTION_REQUIRED: &str = "Por favor ingrese la descripción del medicamento.";
pub const DOSE_REQUIRED: &str = "Por favor ingrese la dosis del medicamento.";
pub const DOSE_INVALID: &str = "Por favor ingrese una dosis valida.";
pub const DOSE_OUT_OF_RANGE: &str = "La dosis debe estar entre 1 y 10.";
